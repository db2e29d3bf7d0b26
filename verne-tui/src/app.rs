//! Application shell: event loop, message handling, and the screen tree.
//!
//! The app owns all state and runs a single loop: draw a frame, then wait
//! for either a terminal event or a message. Row actions, sorting, and
//! paging are wired as handlers that send an [`AppMsg`] back into the
//! loop, so user input and async results go through the same funnel.

use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use log::{debug, error, info};
use tokio::sync::mpsc;
use uuid::Uuid;
use verne_api::{ApiError, Author, Book, BookExpanded, BookStatus, Genre, VerneClient};
use verne_dom::{Color, Edges, Element, Size, Style, Terminal};
use verne_table::{
    clamp_page, filter_records, page_slice, sort_records, ColumnSpec, DataTable, EventData,
    HandlerRegistry, Pagination, RecordCallback, SortConfig, TableCallbacks, TableViewState,
};

use crate::books::{book_columns, BookDraft, BookRow};
use crate::modals::{ConfirmModal, Picker, PickerKind, PickerOutcome};
use crate::toast::Toast;

const TABLE_ID: &str = "books";
const TICK: Duration = Duration::from_millis(250);

const ACCENT: Color = Color::rgb(100, 160, 250);
const MUTED: Color = Color::rgb(130, 130, 140);

/// Everything that can happen to the app, from the UI or from the network.
pub enum AppMsg {
    BooksLoaded(Result<Vec<BookExpanded>, ApiError>),
    AuthorsLoaded(Result<Vec<Author>, ApiError>),
    GenresLoaded(Result<Vec<Genre>, ApiError>),
    BookSaved(Result<Book, ApiError>),
    BookDeleted(Uuid, Result<(), ApiError>),
    AuthorCreated(Result<Author, ApiError>),
    GenreCreated(Result<Genre, ApiError>),
    Edit(Uuid),
    Save(Uuid),
    CancelEdit(Uuid),
    DeleteRequested(Uuid),
    ConfirmDelete(bool),
    SortBy(String),
    GoToPage(usize),
    FocusSearch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Browse,
    Search,
    Edit,
}

/// The draft field that keyboard input currently targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditField {
    Title,
    Author,
    Genre,
    Status,
    Rating,
}

impl EditField {
    const ORDER: [EditField; 5] = [
        EditField::Title,
        EditField::Author,
        EditField::Genre,
        EditField::Status,
        EditField::Rating,
    ];

    fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn label(self) -> &'static str {
        match self {
            EditField::Title => "title",
            EditField::Author => "author",
            EditField::Genre => "genre",
            EditField::Status => "status",
            EditField::Rating => "rating",
        }
    }
}

pub struct App {
    client: VerneClient,
    terminal: Terminal,
    registry: HandlerRegistry,
    columns: Vec<ColumnSpec>,
    tx: mpsc::UnboundedSender<AppMsg>,
    rx: Option<mpsc::UnboundedReceiver<AppMsg>>,

    books: Option<Vec<BookExpanded>>,
    authors: Vec<Author>,
    genres: Vec<Genre>,
    loading: bool,
    error: Option<String>,

    state: TableViewState,
    mode: Mode,
    field: EditField,
    draft: Option<BookDraft>,
    draft_errors: HashMap<String, String>,
    creating: bool,
    pending_pick: Option<PickerKind>,

    picker: Option<Picker>,
    confirm: Option<(Uuid, ConfirmModal)>,
    toasts: Vec<Toast>,
    quit: bool,
}

impl App {
    pub fn new(client: VerneClient, terminal: Terminal) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client,
            terminal,
            registry: HandlerRegistry::new(),
            columns: book_columns(),
            tx,
            rx: Some(rx),
            books: None,
            authors: Vec::new(),
            genres: Vec::new(),
            loading: false,
            error: None,
            state: TableViewState::new(SortConfig::descending("added")),
            mode: Mode::Browse,
            field: EditField::Title,
            draft: None,
            draft_errors: HashMap::new(),
            creating: false,
            pending_pick: None,
            picker: None,
            confirm: None,
            toasts: Vec::new(),
            quit: false,
        }
    }

    pub async fn run(mut self) -> io::Result<()> {
        let Some(mut rx) = self.rx.take() else {
            return Ok(());
        };

        self.spawn_load();
        self.spawn_load_authors();
        self.spawn_load_genres();

        let mut events = EventStream::new();
        while !self.quit {
            self.draw()?;
            tokio::select! {
                maybe = events.next() => match maybe {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(err)) => error!("event stream: {err}"),
                    None => break,
                },
                Some(msg) = rx.recv() => self.handle_msg(msg),
                _ = tokio::time::sleep(TICK) => {}
            }
            self.toasts.retain(|t| !t.expired());
        }
        Ok(())
    }

    // ---- async operations ------------------------------------------------

    fn spawn_load(&mut self) {
        self.loading = true;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(AppMsg::BooksLoaded(client.list_books().await));
        });
    }

    fn spawn_load_authors(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(AppMsg::AuthorsLoaded(client.list_authors(None).await));
        });
    }

    fn spawn_load_genres(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(AppMsg::GenresLoaded(client.list_genres(None).await));
        });
    }

    fn spawn_save(&self, book: Book, create: bool) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = if create {
                client.create_book(&book).await
            } else {
                client.update_book(&book).await
            };
            let _ = tx.send(AppMsg::BookSaved(result));
        });
    }

    fn spawn_delete(&self, id: Uuid) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(AppMsg::BookDeleted(id, client.delete_book(id).await));
        });
    }

    fn spawn_create_author(&self, name: String) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(AppMsg::AuthorCreated(client.create_author(&name).await));
        });
    }

    fn spawn_create_genre(&self, name: String) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(AppMsg::GenreCreated(client.create_genre(&name).await));
        });
    }

    // ---- message handling ------------------------------------------------

    fn handle_msg(&mut self, msg: AppMsg) {
        match msg {
            AppMsg::BooksLoaded(Ok(books)) => {
                info!("loaded {} books", books.len());
                self.loading = false;
                self.error = None;
                self.books = Some(books);
            }
            AppMsg::BooksLoaded(Err(err)) => {
                error!("loading books failed: {err}");
                self.loading = false;
                if self.books.is_none() {
                    self.error = Some("Failed to load books. Is the server running?".to_string());
                } else {
                    self.toasts.push(Toast::error("Refresh failed"));
                }
            }
            AppMsg::AuthorsLoaded(Ok(authors)) => self.authors = authors,
            AppMsg::AuthorsLoaded(Err(err)) => error!("loading authors failed: {err}"),
            AppMsg::GenresLoaded(Ok(genres)) => self.genres = genres,
            AppMsg::GenresLoaded(Err(err)) => error!("loading genres failed: {err}"),
            AppMsg::BookSaved(Ok(book)) => {
                info!("saved book {}", book.id);
                self.toasts.push(Toast::success(if self.creating {
                    "Book added"
                } else {
                    "Book saved"
                }));
                self.finish_edit();
                self.spawn_load();
            }
            AppMsg::BookSaved(Err(err)) => {
                error!("saving book failed: {err}");
                self.toasts.push(Toast::error("Saving failed"));
            }
            AppMsg::BookDeleted(id, Ok(())) => {
                info!("deleted book {id}");
                if let Some(books) = &mut self.books {
                    books.retain(|b| b.id != id);
                }
                self.toasts.push(Toast::success("Book deleted"));
            }
            AppMsg::BookDeleted(id, Err(err)) => {
                error!("deleting book {id} failed: {err}");
                self.toasts.push(Toast::error("Deleting failed"));
            }
            AppMsg::AuthorCreated(Ok(author)) => {
                if self.pending_pick.take() == Some(PickerKind::Author) {
                    if let Some(draft) = &mut self.draft {
                        draft.author = Some((author.id, author.name.clone()));
                        self.draft_errors.remove("author");
                    }
                }
                self.toasts.push(Toast::success(format!("Added {}", author.name)));
                self.authors.push(author);
            }
            AppMsg::AuthorCreated(Err(err)) => {
                error!("creating author failed: {err}");
                self.pending_pick = None;
                self.toasts.push(Toast::error("Could not add author"));
            }
            AppMsg::GenreCreated(Ok(genre)) => {
                if self.pending_pick.take() == Some(PickerKind::Genre) {
                    if let Some(draft) = &mut self.draft {
                        draft.genre = Some((genre.id, genre.name.clone()));
                        self.draft_errors.remove("genre");
                    }
                }
                self.toasts.push(Toast::success(format!("Added {}", genre.name)));
                self.genres.push(genre);
            }
            AppMsg::GenreCreated(Err(err)) => {
                error!("creating genre failed: {err}");
                self.pending_pick = None;
                self.toasts.push(Toast::error("Could not add genre"));
            }
            AppMsg::Edit(id) => self.start_edit(id),
            AppMsg::Save(_) => self.request_save(),
            AppMsg::CancelEdit(_) => self.cancel_edit(),
            AppMsg::DeleteRequested(id) => {
                if self.state.editing().is_some() {
                    return;
                }
                if let Some(title) = self.book_title(id) {
                    let modal = ConfirmModal::new(format!("Delete \"{title}\"?"))
                        .title("Delete book");
                    self.confirm = Some((id, modal));
                }
            }
            AppMsg::ConfirmDelete(yes) => {
                if let Some((id, _)) = self.confirm.take() {
                    if yes {
                        self.spawn_delete(id);
                    }
                }
            }
            AppMsg::SortBy(key) => self.state.toggle_sort(&key),
            AppMsg::GoToPage(page) => self.state.set_current_page(page),
            AppMsg::FocusSearch => {
                if self.mode == Mode::Browse {
                    self.mode = Mode::Search;
                }
            }
        }
    }

    fn book_title(&self, id: Uuid) -> Option<String> {
        self.books
            .as_ref()?
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.title.clone())
    }

    // ---- editing lifecycle -----------------------------------------------

    fn start_edit(&mut self, id: Uuid) {
        if self.state.editing().is_some() {
            return;
        }
        let Some(book) = self
            .books
            .as_ref()
            .and_then(|list| list.iter().find(|b| b.id == id))
            .cloned()
        else {
            return;
        };
        self.draft = Some(BookDraft::from_book(&book));
        self.draft_errors.clear();
        self.state.begin_edit(id);
        self.mode = Mode::Edit;
        self.field = EditField::Title;
    }

    fn start_create(&mut self) {
        if self.state.editing().is_some() {
            return;
        }
        let draft = BookDraft::new(chrono::Local::now().date_naive());
        let id = draft.id;
        debug!("creating draft book {id}");
        match &mut self.books {
            Some(books) => books.insert(0, draft.to_expanded()),
            None => self.books = Some(vec![draft.to_expanded()]),
        }
        self.creating = true;
        self.draft = Some(draft);
        self.draft_errors.clear();
        self.state.begin_edit(id);
        self.mode = Mode::Edit;
        self.field = EditField::Title;
    }

    fn request_save(&mut self) {
        let Some(draft) = &self.draft else { return };
        let errors = draft.validate();
        if !errors.is_empty() {
            self.draft_errors = errors;
            return;
        }
        let Some(book) = draft.to_book() else { return };
        self.draft_errors.clear();
        self.spawn_save(book, self.creating);
    }

    fn cancel_edit(&mut self) {
        if self.creating {
            // Drop the placeholder row the create flow inserted.
            if let (Some(books), Some(draft)) = (&mut self.books, &self.draft) {
                books.retain(|b| b.id != draft.id);
            }
        }
        self.finish_edit();
    }

    fn finish_edit(&mut self) {
        self.draft = None;
        self.draft_errors.clear();
        self.creating = false;
        self.pending_pick = None;
        self.picker = None;
        self.state.end_edit();
        self.mode = Mode::Browse;
    }

    // ---- input -----------------------------------------------------------

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }
        if self.picker.is_some() {
            self.handle_picker_key(key);
            return;
        }
        if self.confirm.is_some() {
            self.handle_confirm_key(key);
            return;
        }
        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Search => self.handle_search_key(key),
            Mode::Edit => self.handle_edit_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Char('n') => self.start_create(),
            KeyCode::Char('r') => self.spawn_load(),
            KeyCode::Left => {
                let target = self.state.current_page().saturating_sub(1).max(1);
                self.state.set_current_page(target);
            }
            KeyCode::Right => {
                let total = self.state.total_pages().max(1);
                let target = (self.state.current_page() + 1).min(total);
                self.state.set_current_page(target);
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.mode = Mode::Browse,
            KeyCode::Backspace => {
                let mut term = self.state.search_term().to_string();
                term.pop();
                self.state.set_search_term(term);
            }
            KeyCode::Char(c) => {
                let mut term = self.state.search_term().to_string();
                term.push(c);
                self.state.set_search_term(term);
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.request_save();
            return;
        }
        match key.code {
            KeyCode::Esc => self.cancel_edit(),
            KeyCode::Tab => self.field = self.field.next(),
            KeyCode::BackTab => self.field = self.field.prev(),
            KeyCode::Enter => match self.field {
                EditField::Author => self.open_picker(PickerKind::Author),
                EditField::Genre => self.open_picker(PickerKind::Genre),
                _ => self.request_save(),
            },
            KeyCode::Backspace => {
                if let Some(draft) = &mut self.draft {
                    match self.field {
                        EditField::Title => {
                            draft.title.pop();
                        }
                        EditField::Rating => draft.rating = None,
                        _ => {}
                    }
                }
            }
            KeyCode::Left | KeyCode::Right if self.field == EditField::Status => {
                if let Some(draft) = &mut self.draft {
                    let options = BookStatus::SELECTABLE;
                    let i = options.iter().position(|s| *s == draft.status).unwrap_or(0);
                    let n = options.len();
                    draft.status = if key.code == KeyCode::Left {
                        options[(i + n - 1) % n]
                    } else {
                        options[(i + 1) % n]
                    };
                }
            }
            KeyCode::Char(c) => {
                if let Some(draft) = &mut self.draft {
                    match self.field {
                        EditField::Title => draft.title.push(c),
                        EditField::Rating if ('1'..='5').contains(&c) => {
                            draft.rating = Some(c as u8 - b'0');
                        }
                        EditField::Rating if c == '0' => draft.rating = None,
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }

    fn open_picker(&mut self, kind: PickerKind) {
        let options = match kind {
            PickerKind::Author => self
                .authors
                .iter()
                .map(|a| (a.id, a.name.clone()))
                .collect(),
            PickerKind::Genre => self.genres.iter().map(|g| (g.id, g.name.clone())).collect(),
        };
        self.picker = Some(Picker::new(kind, options));
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let Some(mut picker) = self.picker.take() else { return };
        match key.code {
            KeyCode::Esc => return,
            KeyCode::Up => picker.move_up(),
            KeyCode::Down => picker.move_down(),
            KeyCode::Backspace => {
                picker.backspace();
            }
            KeyCode::Char(c) => {
                picker.push_char(c);
            }
            KeyCode::Enter => {
                let kind = picker.kind;
                match picker.choose() {
                    PickerOutcome::Chosen(id, name) => {
                        if let Some(draft) = &mut self.draft {
                            match kind {
                                PickerKind::Author => {
                                    draft.author = Some((id, name));
                                    self.draft_errors.remove("author");
                                }
                                PickerKind::Genre => {
                                    draft.genre = Some((id, name));
                                    self.draft_errors.remove("genre");
                                }
                            }
                        }
                        return;
                    }
                    PickerOutcome::CreateNew(name) => {
                        self.pending_pick = Some(kind);
                        match kind {
                            PickerKind::Author => self.spawn_create_author(name),
                            PickerKind::Genre => self.spawn_create_genre(name),
                        }
                        return;
                    }
                    PickerOutcome::Cancelled => return,
                    PickerOutcome::Pending => {}
                }
            }
            _ => {}
        }
        self.picker = Some(picker);
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => self.handle_msg(AppMsg::ConfirmDelete(true)),
            KeyCode::Esc | KeyCode::Char('n') => self.handle_msg(AppMsg::ConfirmDelete(false)),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let target = self
            .terminal
            .last_layout()
            .hit(mouse.column, mouse.row)
            .map(String::from);
        if let Some(id) = target {
            debug!("click on {id}");
            self.registry.dispatch(&id, "activate", &EventData::None);
        }
    }

    // ---- view ------------------------------------------------------------

    fn draw(&mut self) -> io::Result<()> {
        let root = self.view();
        self.terminal.render(&root)?;
        Ok(())
    }

    fn view(&mut self) -> Element {
        self.registry.clear();

        // Derive the visible slice: filter, sort, clamp, slice.
        let mut rows: Vec<BookRow> = self
            .books
            .clone()
            .unwrap_or_default()
            .into_iter()
            .map(BookRow)
            .collect();
        if let Some(draft) = &self.draft {
            if let Some(row) = rows.iter_mut().find(|r| r.0.id == draft.id) {
                row.0 = draft.to_expanded();
            }
        }
        let filtered = filter_records(&rows, self.state.search_term());
        let sorted = sort_records(&filtered, self.state.sort());
        self.state.set_total_items(sorted.len());
        let page = clamp_page(
            self.state.current_page(),
            sorted.len(),
            self.state.page_size(),
        );
        self.state.set_current_page(page);
        let visible = page_slice(&sorted, page, self.state.page_size()).to_vec();

        let content = if let Some(picker) = &self.picker {
            picker.element()
        } else if let Some((_, modal)) = &self.confirm {
            let ok = self.tx.clone();
            self.registry.register(
                "confirm-ok",
                "activate",
                Arc::new(move |_: &EventData| {
                    let _ = ok.send(AppMsg::ConfirmDelete(true));
                }),
            );
            let cancel = self.tx.clone();
            self.registry.register(
                "confirm-cancel",
                "activate",
                Arc::new(move |_: &EventData| {
                    let _ = cancel.send(AppMsg::ConfirmDelete(false));
                }),
            );
            modal.element()
        } else {
            self.table_element(&visible, sorted.len(), page)
        };

        let mut root = Element::col()
            .id("app")
            .width(Size::Fill)
            .height(Size::Fill)
            .padding(Edges::all(1))
            .gap(1)
            .child(self.title_bar())
            .child(self.search_bar())
            .child(content)
            .child(self.status_line());

        for toast in &self.toasts {
            root = root.child(toast.element());
        }
        root
    }

    fn table_element(&self, visible: &[BookRow], total_items: usize, page: usize) -> Element {
        let callbacks = TableCallbacks::new(
            self.record_cb(AppMsg::Edit),
            self.record_cb(AppMsg::Save),
            self.record_cb(AppMsg::CancelEdit),
            self.record_cb(AppMsg::DeleteRequested),
        );

        let sort_tx = self.tx.clone();
        let page_tx = self.tx.clone();
        let empty = if self.state.search_term().is_empty() {
            "No books yet. Press n to add one."
        } else {
            "No books match your search."
        };

        DataTable::new(TABLE_ID, &self.columns, callbacks)
            .records(visible)
            .loading(self.loading && self.books.is_none())
            .error(self.error.clone())
            .empty_text(empty)
            .editing(self.state.editing())
            .field_errors(self.draft_errors.clone())
            .sort(self.state.sort().clone())
            .on_sort(Arc::new(move |key: &str| {
                let _ = sort_tx.send(AppMsg::SortBy(key.to_string()));
            }))
            .pagination(Pagination {
                current_page: page,
                total_pages: self.state.total_pages(),
                page_size: self.state.page_size(),
                total_items,
                on_page_change: Arc::new(move |target: usize| {
                    let _ = page_tx.send(AppMsg::GoToPage(target));
                }),
            })
            .build(&self.registry)
    }

    fn record_cb(&self, make: fn(Uuid) -> AppMsg) -> RecordCallback {
        let tx = self.tx.clone();
        Arc::new(move |id: Uuid| {
            let _ = tx.send(make(id));
        })
    }

    fn title_bar(&self) -> Element {
        let count = self.books.as_ref().map(Vec::len).unwrap_or(0);
        Element::row()
            .width(Size::Fill)
            .gap(2)
            .child(Element::text("Verne").style(Style::new().bold().foreground(ACCENT)))
            .child(
                Element::text(format!("{count} books"))
                    .style(Style::new().foreground(MUTED)),
            )
    }

    fn search_bar(&self) -> Element {
        let term = self.state.search_term();
        let focused = self.mode == Mode::Search;
        let value = if term.is_empty() && !focused {
            Element::text("Press / to search").style(Style::new().foreground(MUTED))
        } else {
            let caret = if focused { "▏" } else { "" };
            let mut style = Style::new();
            if focused {
                style = style.underline();
            }
            Element::text(format!("{term}{caret}")).style(style)
        };

        let search_tx = self.tx.clone();
        self.registry.register(
            "search-box",
            "activate",
            Arc::new(move |_: &EventData| {
                let _ = search_tx.send(AppMsg::FocusSearch);
            }),
        );

        Element::row()
            .id("search-box")
            .width(Size::Fill)
            .gap(1)
            .clickable(true)
            .child(Element::text("Search:").style(Style::new().foreground(MUTED)))
            .child(value)
    }

    fn status_line(&self) -> Element {
        let hint = if self.picker.is_some() {
            "↑/↓ move · Enter select · Esc cancel".to_string()
        } else if self.confirm.is_some() {
            "y/Enter confirm · n/Esc cancel".to_string()
        } else {
            match self.mode {
                Mode::Browse => {
                    "q quit · / search · n new · r reload · ←/→ page".to_string()
                }
                Mode::Search => "type to filter · Enter done".to_string(),
                Mode::Edit => format!(
                    "editing {} · Tab next field · Enter pick/save · Esc cancel",
                    self.field.label()
                ),
            }
        };
        Element::text(hint).style(Style::new().foreground(MUTED))
    }
}
