use {
  anyhow::Context,
  api_error::ApiError,
  app::App,
  chart_view::{ChartRow, ChartView},
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment_entry::CommentEntry,
  comment_node::CommentNode,
  comment_record::CommentRecord,
  comment_tree::CommentTree,
  comment_view::CommentView,
  compose_input::ComposeInput,
  config::Config,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  day_counts::DayCounts,
  effect::Effect,
  event::Event,
  feed_query::FeedQuery,
  help_view::HelpView,
  jiff::Timestamp,
  order::Order,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap,
    },
  },
  reply_input::ReplyInput,
  reqwest::StatusCode,
  serde::{
    Deserialize, Deserializer,
    de::{self, Unexpected},
  },
  serde_json::Value,
  slideshow::Slideshow,
  state::State,
  status_flash::StatusFlash,
  std::{
    backtrace::BacktraceStatus,
    collections::{BTreeMap, HashMap, HashSet},
    env,
    io::{self, IsTerminal, Stdout},
    mem, process,
    time::{Duration, Instant, SystemTime},
  },
  tab::Tab,
  thiserror::Error,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  utils::{
    deserialize_timestamp, format_timestamp, truncate, unix_millis, wrap_text,
  },
};

mod api_error;
mod app;
mod chart_view;
mod client;
mod command;
mod command_dispatch;
mod comment_entry;
mod comment_node;
mod comment_record;
mod comment_tree;
mod comment_view;
mod compose_input;
mod config;
mod day_counts;
mod effect;
mod event;
mod feed_query;
mod help_view;
mod order;
mod reply_input;
mod slideshow;
mod state;
mod status_flash;
mod tab;
mod utils;

const COMMENTS_STATUS: &str = "↑/k up • ↓/j down • ←/h collapse • →/l expand • c comment • r reply • s sort • q/esc quit • ? help";

const CHART_STATUS: &str =
  "↑/k ↓/j scroll • g reload • tab switch • q/esc quit • ? help";

const GALLERY_STATUS: &str =
  "n/p next/prev • space play/pause • +/- speed • tab switch • ? help";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_COMMENTS_STATUS: &str = "Loading comments...";
const LOADING_CHART_STATUS: &str = "Loading chart...";
const POSTING_STATUS: &str = "Posting...";
const DELETING_STATUS: &str = "Deleting comments...";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Navigation:
  tab     next tab
  ⇧tab    previous tab
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first comment
  end     jump to last comment
  q       quit
  ?       toggle this help

Comments:
  c       write a new comment
  r       reply to the selected comment
  s       toggle the sort order
  g       reload comments
  D       delete every comment
  ← / h   collapse or go to parent
  → / l   expand or go to first child
  enter   toggle collapse or expand

While writing:
  tab     switch between name and comment
  enter   submit
  esc     cancel

Chart:
  ↑ / ↓   scroll days
  g       reload the chart

Gallery:
  n / →   next image
  p / ←   previous image
  space   play or pause
  + / -   change speed
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let config = Config::from_env()?;

  let client = Client::new(config.api_url.clone());

  let query = FeedQuery {
    max_comments: config.max_comments,
    metric: config.metric.clone(),
    order: Order::Descending,
  };

  let records = client
    .fetch_comments(&query)
    .await
    .context("could not load comments")?;

  let comments =
    CommentView::new(CommentTree::build(&records, config.max_comments));

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, State::new(config, comments));

  app.run(&mut terminal)?;

  restore_terminal(&mut terminal)
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
