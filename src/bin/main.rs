//! Interactive terminal front-end for the `yomu-core` reading session.
//!
//! Wires the stub library and an in-memory position store to a
//! [`ReaderSession`] and maps line commands to navigation intents. Scroll
//! requests are printed instead of applied; visibility batches can be typed
//! in to exercise the vertical-mode tracker by hand.

use std::io::{self, BufRead, Write};

use log::LevelFilter;
use yomu_core::auth::{SessionAuth, TokenAuth};
use yomu_core::position::MemoryPositionStore;
use yomu_core::source::{StubLibrary, sample_library};
use yomu_core::{
    ChapterId, MangaId, PageVisibility, ReaderError, ReaderOptions, ReaderSession, ScrollRequest,
};

const HELP: &str = "\
commands:
  list                 show the catalog
  search <text>        search titles and authors
  open <manga> <chap>  open a (manga id, chapter id) pair
  n / p                next / previous page
  nc / pc              next / previous chapter
  g <page>             jump to a 0-based page
  m                    toggle reading mode
  v <page:ratio>...    feed a visibility batch, e.g. `v 2:0.8 3:0.4`
  i                    show session state
  login <token> / logout
  q                    quit";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let library = sample_library();
    let mut session = ReaderSession::new(
        library.clone(),
        MemoryPositionStore::new(),
        ReaderOptions {
            auto_advance_on_last_page: true,
            ..ReaderOptions::default()
        },
    );
    let mut auth = TokenAuth::new();

    println!("yomu demo reader\n{HELP}");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        match command {
            "list" => print_catalog(&library).await,
            "search" => {
                let query = parts.collect::<Vec<_>>().join(" ");
                for manga in library.search(&query) {
                    println!("  [{}] {} by {}", manga.id, manga.title, manga.author);
                }
            }
            "open" => match (parse_u64(parts.next()), parse_u64(parts.next())) {
                (Some(manga), Some(chapter)) => {
                    report(
                        session.open(MangaId(manga), ChapterId(chapter)).await,
                        &session,
                    );
                }
                _ => println!("usage: open <manga id> <chapter id>"),
            },
            "n" => {
                let outcome = session.next_page().await;
                report_scroll(outcome, &session);
            }
            "p" => {
                let outcome = session.prev_page().await;
                report_scroll(outcome, &session);
            }
            "nc" => {
                let outcome = session.next_chapter().await;
                report_scroll(outcome, &session);
            }
            "pc" => {
                let outcome = session.prev_chapter().await;
                report_scroll(outcome, &session);
            }
            "g" => match parse_u64(parts.next()) {
                Some(page) => {
                    let scroll = session.go_to_page(page as usize);
                    print_scroll(scroll);
                    print_state(&session);
                }
                None => println!("usage: g <page>"),
            },
            "m" => {
                let scroll = session.toggle_reading_mode();
                print_scroll(scroll);
                print_state(&session);
            }
            "v" => {
                let batch: Vec<PageVisibility> =
                    parts.filter_map(parse_visibility).collect();
                session.observe_visibility(&batch);
                if session.take_auto_advance() {
                    println!("auto-advance: loading the next chapter");
                    report_scroll(session.next_chapter().await, &session);
                } else {
                    print_state(&session);
                }
            }
            "i" => print_state(&session),
            "login" => match parts.next() {
                Some(token) => {
                    auth.set_token(token);
                    println!("session present: {}", auth.is_authenticated());
                }
                None => println!("usage: login <token>"),
            },
            "logout" => {
                auth.clear();
                println!("session present: {}", auth.is_authenticated());
            }
            "q" => break,
            _ => println!("{HELP}"),
        }
        let _ = io::stdout().flush();
    }
}

async fn print_catalog(library: &StubLibrary) {
    use yomu_core::source::MangaCatalog;

    match library.manga_list().await {
        Ok(list) => {
            for manga in list {
                println!("  [{}] {} by {}", manga.id, manga.title, manga.author);
                if let Ok(chapters) = library.chapters(manga.id).await {
                    for chapter in chapters {
                        println!("      [{}] {}", chapter.id, chapter.title);
                    }
                }
            }
        }
        Err(err) => println!("catalog error: {err}"),
    }
}

fn report(outcome: Result<(), ReaderError>, session: &ReaderSession<StubLibrary, MemoryPositionStore>) {
    match outcome {
        Ok(()) => print_state(session),
        Err(err) => println!("error: {err}"),
    }
}

fn report_scroll(
    outcome: Result<ScrollRequest, ReaderError>,
    session: &ReaderSession<StubLibrary, MemoryPositionStore>,
) {
    match outcome {
        Ok(scroll) => {
            print_scroll(scroll);
            print_state(session);
        }
        Err(err) => println!("error: {err}"),
    }
}

fn print_scroll(scroll: ScrollRequest) {
    match scroll {
        ScrollRequest::None => {}
        ScrollRequest::Top => println!("scroll: top"),
        ScrollRequest::ToPage(page) => println!("scroll: to page {page}"),
    }
}

fn print_state(session: &ReaderSession<StubLibrary, MemoryPositionStore>) {
    let manga = session.manga().map_or("-", |m| m.title.as_str());
    let chapter = session.chapter().map_or("-", |c| c.title.as_str());
    println!(
        "{manga} / {chapter} / page {} ({:?}, tracking: {})",
        session.page_counter(),
        session.reading_mode(),
        session.is_tracking_viewport(),
    );
    if let Some(url) = session.current_page_image() {
        println!("  {url}");
    }
}

fn parse_u64(token: Option<&str>) -> Option<u64> {
    token.and_then(|t| t.parse().ok())
}

fn parse_visibility(token: &str) -> Option<PageVisibility> {
    let (page, ratio) = token.split_once(':')?;
    Some(PageVisibility {
        page: page.parse().ok()?,
        ratio: ratio.parse().ok()?,
    })
}
