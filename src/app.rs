use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn chart_list_item(
    row: &ChartRow,
    max_total: u64,
    available_width: u16,
  ) -> ListItem<'static> {
    let budget = u64::from(available_width).saturating_sub(36).clamp(8, 48);
    let total = row.total();

    let mut length = if max_total == 0 {
      0
    } else {
      usize::try_from(total.saturating_mul(budget) / max_total).unwrap_or(0)
    };

    if total > 0 {
      length = length.max(1);
    }

    ListItem::new(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(row.date.clone(), Style::default().fg(Color::White)),
      Span::raw(" "),
      Span::styled("▇".repeat(length), Style::default().fg(Color::Cyan)),
      Span::raw(" "),
      Span::styled(
        format!("{} roots, {} replies", row.root_comments, row.replies),
        Style::default().fg(Color::DarkGray),
      ),
    ]))
  }

  fn comment_list_item(
    entry: &CommentEntry,
    available_width: u16,
  ) -> ListItem<'static> {
    let depth_indent = "  ".repeat(entry.depth);
    let indent = format!("{BASE_INDENT}{depth_indent}");

    let toggle = entry.has_children().then_some(if entry.expanded {
      "[-]"
    } else {
      "[+]"
    });

    let mut header = vec![Span::raw(indent.clone())];

    if let Some(symbol) = toggle {
      header.push(Span::raw(symbol));
      header.push(Span::raw(" "));
    }

    header.push(Span::styled(
      entry.header(),
      Style::default().fg(Color::White),
    ));

    let mut lines = vec![Line::from(header)];

    if !entry.body.is_empty() {
      let prefix_width = indent.chars().count();

      let wrap_width = usize::from(available_width)
        .saturating_sub(prefix_width)
        .max(1);

      for line in wrap_text(&entry.body, wrap_width) {
        lines.push(Line::from(vec![
          Span::raw(indent.clone()),
          Span::styled(line, Style::default().fg(Color::DarkGray)),
        ]));
      }
    }

    if entry.truncated {
      lines.push(Line::from(vec![
        Span::raw(indent.clone()),
        Span::styled(
          "(reply chain truncated)",
          Style::default().fg(Color::Red),
        ),
      ]));
    }

    lines.push(Line::from(Span::raw(indent)));

    ListItem::new(lines)
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(usize::from(layout[1].height));

    let tab_titles: Vec<Line> = Tab::all()
      .iter()
      .map(|tab| Line::from(tab.label().to_uppercase()))
      .collect();

    let tabs_widget = Tabs::new(tab_titles)
      .select(self.state.active_tab().index())
      .style(Style::default().fg(Color::DarkGray))
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .divider(Span::raw(" "));

    frame.render_widget(tabs_widget, layout[0]);

    match self.state.active_tab() {
      Tab::Chart => self.draw_chart(frame, layout[1]),
      Tab::Comments => self.draw_comments(frame, layout[1]),
      Tab::Gallery => self.draw_gallery(frame, layout[1]),
    }

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn draw_chart(&mut self, frame: &mut Frame, area: Rect) {
    let view = self.state.chart_mut();

    if view.is_empty() {
      let placeholder = List::new(vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw("No chart data yet."),
      ]))]);

      frame.render_widget(placeholder, area);

      return;
    }

    let max_total = view.max_total();

    let mut items: Vec<ListItem> = view
      .rows
      .iter()
      .map(|row| Self::chart_list_item(row, max_total, area.width))
      .collect();

    if let Some(summary) = view.summary() {
      items.push(ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(summary, Style::default().fg(Color::DarkGray)),
      ])));
    }

    let mut list_state = ListState::default()
      .with_selected(Some(view.selected))
      .with_offset(view.offset.min(view.selected));

    let list = List::new(items).highlight_style(
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(list, area, &mut list_state);

    view.offset = list_state.offset();
  }

  fn draw_comments(&mut self, frame: &mut Frame, area: Rect) {
    let view = self.state.comments_mut();

    let (visible, selected_pos) = view.visible_with_selection();

    let mut list_items: Vec<ListItem> = if visible.is_empty() {
      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw("No comments yet. Press c to write one."),
      ]))]
    } else {
      visible
        .iter()
        .map(|&idx| Self::comment_list_item(&view.entries[idx], area.width))
        .collect()
    };

    if view.hidden > 0 {
      list_items.push(ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(
          format!("{} more not shown", view.hidden),
          Style::default().fg(Color::DarkGray),
        ),
      ])));
    }

    let offset = view.offset.min(selected_pos.unwrap_or(0));

    let mut list_state = ListState::default()
      .with_selected(selected_pos)
      .with_offset(offset);

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, area, &mut list_state);

    view.offset = list_state.offset();
  }

  fn draw_gallery(&mut self, frame: &mut Frame, area: Rect) {
    let slideshow = self.state.slideshow();

    let status = if slideshow.is_running() {
      "playing"
    } else {
      "paused"
    };

    let lines = vec![
      Line::from(""),
      Line::from(Span::styled(
        slideshow.current_image(),
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )),
      Line::from(format!(
        "image {} of {}",
        slideshow.current(),
        slideshow.image_count()
      )),
      Line::from(format!(
        "{status}, advancing every {}s",
        slideshow.interval().as_secs()
      )),
      Line::from(""),
      Line::from(Span::styled(
        "n/p next/prev  space play/pause  +/- speed",
        Style::default().fg(Color::DarkGray),
      )),
    ];

    let gallery = Paragraph::new(lines)
      .block(Block::default().title("Gallery").borders(Borders::ALL))
      .alignment(Alignment::Center);

    frame.render_widget(gallery, area);
  }

  fn execute_effect(&mut self, effect: Effect) {
    let (client, sender) = (self.client.clone(), self.event_tx.clone());

    let handle = self.handle.clone();

    match effect {
      Effect::DeleteAll { query, request_id } => {
        handle.spawn(async move {
          let event = match client.delete_all().await {
            Ok(()) => Event::Comments {
              request_id,
              result: client.fetch_comments(&query).await,
            },
            Err(error) => Event::WriteFailed { error, request_id },
          };

          let _ = sender.send(event);
        });
      }
      Effect::FetchChart { request_id } => {
        handle.spawn(async move {
          let result = async {
            let days = client.fetch_chart().await?;
            let reply_sizes = client.fetch_reply_sizes().await?;

            Ok::<_, ApiError>((days, reply_sizes))
          }
          .await;

          let _ = sender.send(Event::Chart { request_id, result });
        });
      }
      Effect::FetchComments { query, request_id } => {
        handle.spawn(async move {
          let _ = sender.send(Event::Comments {
            request_id,
            result: client.fetch_comments(&query).await,
          });
        });
      }
      Effect::SubmitComment {
        body,
        name,
        query,
        request_id,
      } => {
        handle.spawn(async move {
          let event = match client.post_comment(&name, &body).await {
            Ok(()) => Event::Comments {
              request_id,
              result: client.fetch_comments(&query).await,
            },
            Err(error) => Event::WriteFailed { error, request_id },
          };

          let _ = sender.send(event);
        });
      }
      Effect::SubmitReply {
        body,
        parent_id,
        query,
        request_id,
      } => {
        handle.spawn(async move {
          let event = match client.post_reply(parent_id, &body).await {
            Ok(()) => Event::Comments {
              request_id,
              result: client.fetch_comments(&query).await,
            },
            Err(error) => Event::WriteFailed { error, request_id },
          };

          let _ = sender.send(event);
        });
      }
    }
  }

  pub(crate) fn new(client: Client, state: State) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    }
  }

  fn process_pending_events(&mut self) {
    self.state.tick();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        self.process_pending_events();
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        self.process_pending_events();
        continue;
      };

      if key.kind != KeyEventKind::Press {
        self.process_pending_events();
        continue;
      }

      let page = self.state.list_height().max(1);
      let command = self.state.handle_key(key, page);

      let dispatch = self.state.dispatch_command(command);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      if dispatch.should_exit {
        break;
      }

      self.process_pending_events();
    }

    Ok(())
  }
}
