use super::*;

pub(crate) struct State {
  active_tab: Tab,
  chart: ChartView,
  comments: CommentView,
  compose: Option<ComposeInput>,
  config: Config,
  flash: Option<StatusFlash>,
  help: HelpView,
  list_height: usize,
  message: String,
  next_request_id: u64,
  order: Order,
  pending_chart: Option<u64>,
  pending_effects: Vec<Effect>,
  pending_feed: Option<u64>,
  reply: Option<ReplyInput>,
  slideshow: Slideshow,
}

impl State {
  const MESSAGE_WIDTH: usize = 80;

  pub(crate) fn active_tab(&self) -> Tab {
    self.active_tab
  }

  fn cancel_compose(&mut self) {
    if let Some(compose) = self.compose.take() {
      self.message = compose.message_backup;
    }
  }

  fn cancel_reply(&mut self) {
    if let Some(reply) = self.reply.take() {
      self.message = reply.message_backup;
    }
  }

  fn chart_key(&mut self, key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Tab => Command::SwitchTabRight,
      KeyCode::BackTab => Command::SwitchTabLeft,
      KeyCode::Char('g') => Command::Refresh,
      KeyCode::Char('j') | KeyCode::Down => {
        self.chart.select_next();
        Command::None
      }
      KeyCode::Char('k') | KeyCode::Up => {
        self.chart.select_previous();
        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn chart_mut(&mut self) -> &mut ChartView {
    &mut self.chart
  }

  fn comments_key(&mut self, key: KeyEvent, page: usize) -> Command {
    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Tab => Command::SwitchTabRight,
      KeyCode::BackTab => Command::SwitchTabLeft,
      KeyCode::Char('c') => Command::StartCompose,
      KeyCode::Char('r') => Command::StartReply,
      KeyCode::Char('s') => Command::ToggleOrder,
      KeyCode::Char('g') => Command::Refresh,
      KeyCode::Char('D') => Command::DeleteAll,
      KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
        self.comments.page_down(page);
        Command::None
      }
      KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
        self.comments.page_up(page);
        Command::None
      }
      KeyCode::Char('j') | KeyCode::Down => {
        self.comments.select_next();
        Command::None
      }
      KeyCode::Char('k') | KeyCode::Up => {
        self.comments.select_previous();
        Command::None
      }
      KeyCode::PageDown => {
        self.comments.page_down(page);
        Command::None
      }
      KeyCode::PageUp => {
        self.comments.page_up(page);
        Command::None
      }
      KeyCode::Char('h') | KeyCode::Left => {
        self.comments.collapse_selected();
        Command::None
      }
      KeyCode::Char('l') | KeyCode::Right => {
        self.comments.expand_selected();
        Command::None
      }
      KeyCode::Char(' ') | KeyCode::Enter => {
        self.comments.toggle_selected();
        Command::None
      }
      KeyCode::Home => {
        self.comments.select_index_at(0);
        Command::None
      }
      KeyCode::End => {
        self.comments.select_index_at(usize::MAX);
        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn comments_mut(&mut self) -> &mut CommentView {
    &mut self.comments
  }

  fn compose_key(&mut self, key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Esc => return Command::CancelCompose,
      KeyCode::Enter => return Command::SubmitCompose,
      KeyCode::Tab => {
        if let Some(compose) = &mut self.compose {
          compose.switch_field();
        }
      }
      KeyCode::Backspace => {
        if let Some(compose) = &mut self.compose {
          compose.active_buffer_mut().pop();
        }
      }
      KeyCode::Char(ch)
        if !key.modifiers.intersects(
          KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
        ) =>
      {
        if let Some(compose) = &mut self.compose {
          compose.active_buffer_mut().push(ch);
        }
      }
      _ => {}
    }

    self.update_input_message();

    Command::None
  }

  fn delete_all(&mut self) {
    let request_id = self.next_request();

    self.pending_feed = Some(request_id);

    self.pending_effects.push(Effect::DeleteAll {
      query: self.feed_query(),
      request_id,
    });

    self.message = DELETING_STATUS.into();
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> CommandDispatch {
    debug_assert!(self.pending_effects.is_empty());

    match command {
      Command::CancelCompose => self.cancel_compose(),
      Command::CancelReply => self.cancel_reply(),
      Command::DeleteAll => self.delete_all(),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::None => {}
      Command::Quit => {
        return CommandDispatch {
          effects: Vec::new(),
          should_exit: true,
        };
      }
      Command::Refresh => self.refresh(),
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::StartCompose => self.start_compose(),
      Command::StartReply => self.start_reply(),
      Command::SubmitCompose => self.submit_compose(),
      Command::SubmitReply => self.submit_reply(),
      Command::SwitchTabLeft => self.switch_tab(self.active_tab.previous()),
      Command::SwitchTabRight => self.switch_tab(self.active_tab.next()),
      Command::ToggleOrder => self.toggle_order(),
    }

    CommandDispatch {
      effects: mem::take(&mut self.pending_effects),
      should_exit: false,
    }
  }

  fn feed_query(&self) -> FeedQuery {
    FeedQuery {
      max_comments: self.config.max_comments,
      metric: self.config.metric.clone(),
      order: self.order,
    }
  }

  fn gallery_key(&mut self, key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Tab => Command::SwitchTabRight,
      KeyCode::BackTab => Command::SwitchTabLeft,
      KeyCode::Char('n') | KeyCode::Right => {
        self.slideshow.next();
        Command::None
      }
      KeyCode::Char('p') | KeyCode::Left => {
        self.slideshow.prev();
        Command::None
      }
      KeyCode::Char(' ') => {
        self.slideshow.toggle_running();
        Command::None
      }
      KeyCode::Char('+' | '=') => {
        let interval = self
          .slideshow
          .interval()
          .saturating_sub(Duration::from_secs(1));

        self.slideshow.set_speed(interval);
        Command::None
      }
      KeyCode::Char('-') => {
        let interval = self.slideshow.interval() + Duration::from_secs(1);

        self.slideshow.set_speed(interval);
        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Chart { request_id, result } => {
        if self.pending_chart != Some(request_id) {
          return;
        }

        self.pending_chart = None;

        match result {
          Ok((days, reply_sizes)) => {
            self.chart = ChartView::new(days, reply_sizes);

            if self.active_tab == Tab::Chart && !self.help.is_visible() {
              self.message = CHART_STATUS.into();
            }
          }
          Err(error) => {
            self.set_flash(format!("Could not load chart: {error}"));
          }
        }
      }
      Event::Comments { request_id, result } => {
        if self.pending_feed != Some(request_id) {
          return;
        }

        self.pending_feed = None;

        match result {
          Ok(records) => {
            self.comments = CommentView::new(CommentTree::build(
              &records,
              self.config.max_comments,
            ));

            if self.active_tab == Tab::Comments && !self.help.is_visible() {
              self.message = COMMENTS_STATUS.into();
            }
          }
          Err(error) => {
            self.set_flash(format!("Could not load comments: {error}"));
          }
        }
      }
      Event::WriteFailed { error, request_id } => {
        if self.pending_feed == Some(request_id) {
          self.pending_feed = None;
        }

        self.set_flash(format!("Write failed: {error}"));
      }
    }
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent, page: usize) -> Command {
    if self.help.is_visible() {
      return HelpView::handle_key(key);
    }

    if self.compose.is_some() {
      return self.compose_key(key);
    }

    if self.reply.is_some() {
      return self.reply_key(key);
    }

    match self.active_tab {
      Tab::Chart => self.chart_key(key),
      Tab::Comments => self.comments_key(key, page),
      Tab::Gallery => self.gallery_key(key),
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn list_height(&self) -> usize {
    self.list_height
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new(config: Config, comments: CommentView) -> Self {
    Self {
      active_tab: Tab::Comments,
      chart: ChartView::default(),
      comments,
      compose: None,
      config,
      flash: None,
      help: HelpView::new(),
      list_height: 0,
      message: COMMENTS_STATUS.into(),
      next_request_id: 0,
      order: Order::Descending,
      pending_chart: None,
      pending_effects: Vec::new(),
      pending_feed: None,
      reply: None,
      slideshow: Slideshow::new(Slideshow::IMAGE_COUNT),
    }
  }

  fn next_request(&mut self) -> u64 {
    self.next_request_id = self.next_request_id.wrapping_add(1);
    self.next_request_id
  }

  fn push_chart_fetch(&mut self) {
    let request_id = self.next_request();

    self.pending_chart = Some(request_id);
    self.pending_effects.push(Effect::FetchChart { request_id });

    if !self.help.is_visible() {
      self.message = LOADING_CHART_STATUS.into();
    }
  }

  fn push_feed_fetch(&mut self) {
    let request_id = self.next_request();

    self.pending_feed = Some(request_id);

    self.pending_effects.push(Effect::FetchComments {
      query: self.feed_query(),
      request_id,
    });

    if !self.help.is_visible() {
      self.message = LOADING_COMMENTS_STATUS.into();
    }
  }

  fn refresh(&mut self) {
    match self.active_tab {
      Tab::Chart => self.push_chart_fetch(),
      Tab::Comments => self.push_feed_fetch(),
      Tab::Gallery => {}
    }
  }

  fn reply_key(&mut self, key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Esc => return Command::CancelReply,
      KeyCode::Enter => return Command::SubmitReply,
      KeyCode::Backspace => {
        if let Some(reply) = &mut self.reply {
          reply.buffer.pop();
        }
      }
      KeyCode::Char(ch)
        if !key.modifiers.intersects(
          KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
        ) =>
      {
        if let Some(reply) = &mut self.reply {
          reply.buffer.push(ch);
        }
      }
      _ => {}
    }

    self.update_input_message();

    Command::None
  }

  fn set_flash(&mut self, shown: String) {
    let original = if let Some(compose) = &self.compose {
      truncate(&compose.prompt(), Self::MESSAGE_WIDTH)
    } else if let Some(reply) = &self.reply {
      truncate(&reply.prompt(), Self::MESSAGE_WIDTH)
    } else {
      self.tab_status().to_string()
    };

    let flash = StatusFlash::new(shown, original);

    self.message = flash.shown().to_string();
    self.flash = Some(flash);
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn slideshow(&self) -> &Slideshow {
    &self.slideshow
  }

  fn start_compose(&mut self) {
    self.compose = Some(ComposeInput::new(self.message.clone()));
    self.update_input_message();
  }

  fn start_reply(&mut self) {
    match self.comments.selected_entry() {
      Some(entry) => {
        let parent_id = entry.id;

        self.reply = Some(ReplyInput::new(parent_id, self.message.clone()));
        self.update_input_message();
      }
      None => self.set_flash("No comment selected".to_string()),
    }
  }

  fn submit_compose(&mut self) {
    let Some(compose) = self.compose.take() else {
      return;
    };

    if compose.body.trim().is_empty() {
      self.compose = Some(compose);
      self.set_flash("Comment text is empty".to_string());
      return;
    }

    let request_id = self.next_request();

    self.pending_feed = Some(request_id);

    self.pending_effects.push(Effect::SubmitComment {
      body: compose.body.trim().to_string(),
      name: compose.name.trim().to_string(),
      query: self.feed_query(),
      request_id,
    });

    self.flash = None;
    self.message = POSTING_STATUS.into();
  }

  fn submit_reply(&mut self) {
    let Some(reply) = self.reply.take() else {
      return;
    };

    if reply.buffer.trim().is_empty() {
      self.reply = Some(reply);
      self.set_flash("Reply text is empty".to_string());
      return;
    }

    let request_id = self.next_request();

    self.pending_feed = Some(request_id);

    self.pending_effects.push(Effect::SubmitReply {
      body: reply.buffer.trim().to_string(),
      parent_id: reply.parent_id,
      query: self.feed_query(),
      request_id,
    });

    self.flash = None;
    self.message = POSTING_STATUS.into();
  }

  fn switch_tab(&mut self, target: Tab) {
    self.active_tab = target;
    self.flash = None;
    self.message = self.tab_status().into();

    if target == Tab::Chart
      && self.chart.is_empty()
      && self.pending_chart.is_none()
    {
      self.push_chart_fetch();
    }
  }

  fn tab_status(&self) -> &'static str {
    match self.active_tab {
      Tab::Chart => CHART_STATUS,
      Tab::Comments => COMMENTS_STATUS,
      Tab::Gallery => GALLERY_STATUS,
    }
  }

  pub(crate) fn tick(&mut self) {
    self.update_flash();
    self.slideshow.tick(Instant::now());
  }

  fn toggle_order(&mut self) {
    self.order = self.order.toggled();
    self.push_feed_fetch();
  }

  fn update_flash(&mut self) {
    if self.flash.as_ref().is_some_and(StatusFlash::is_expired)
      && let Some(flash) = self.flash.take()
    {
      self.message = flash.original().to_string();
    }
  }

  fn update_input_message(&mut self) {
    let prompt = if let Some(compose) = &self.compose {
      compose.prompt()
    } else if let Some(reply) = &self.reply {
      reply.prompt()
    } else {
      return;
    };

    self.flash = None;
    self.message = truncate(&prompt, Self::MESSAGE_WIDTH);
  }
}
