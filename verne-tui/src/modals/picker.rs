//! Fuzzy picker for authors and genres.

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use uuid::Uuid;
use verne_dom::{Color, Edges, Element, Size, Style};

const SURFACE: Color = Color::rgb(35, 35, 45);
const ACCENT: Color = Color::rgb(100, 160, 250);
const MUTED: Color = Color::rgb(130, 130, 140);

const MAX_VISIBLE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Author,
    Genre,
}

impl PickerKind {
    fn title(self) -> &'static str {
        match self {
            PickerKind::Author => "Select author",
            PickerKind::Genre => "Select genre",
        }
    }
}

/// What a key press did to the picker.
pub enum PickerOutcome {
    Pending,
    Chosen(Uuid, String),
    /// Enter on a query that matches nothing: create the entry.
    CreateNew(String),
    Cancelled,
}

/// Type-to-filter list over already loaded options.
pub struct Picker {
    pub kind: PickerKind,
    query: String,
    options: Vec<(Uuid, String)>,
    filtered: Vec<usize>,
    selected: usize,
    matcher: Matcher,
}

impl Picker {
    pub fn new(kind: PickerKind, options: Vec<(Uuid, String)>) -> Self {
        let filtered = (0..options.len()).collect();
        Self {
            kind,
            query: String::new(),
            options,
            filtered,
            selected: 0,
            matcher: Matcher::new(Config::DEFAULT),
        }
    }

    pub fn push_char(&mut self, c: char) -> PickerOutcome {
        self.query.push(c);
        self.refilter();
        PickerOutcome::Pending
    }

    pub fn backspace(&mut self) -> PickerOutcome {
        self.query.pop();
        self.refilter();
        PickerOutcome::Pending
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.filtered.len() {
            self.selected += 1;
        }
    }

    pub fn choose(&self) -> PickerOutcome {
        match self.filtered.get(self.selected) {
            Some(&index) => {
                let (id, name) = &self.options[index];
                PickerOutcome::Chosen(*id, name.clone())
            }
            None if !self.query.trim().is_empty() => {
                PickerOutcome::CreateNew(self.query.trim().to_string())
            }
            None => PickerOutcome::Cancelled,
        }
    }

    fn refilter(&mut self) {
        let query = self.query.trim();
        if query.is_empty() {
            self.filtered = (0..self.options.len()).collect();
        } else {
            let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
            let mut buf = Vec::new();
            let mut scored: Vec<(u32, usize)> = self
                .options
                .iter()
                .enumerate()
                .filter_map(|(i, (_, name))| {
                    pattern
                        .score(Utf32Str::new(name, &mut buf), &mut self.matcher)
                        .map(|score| (score, i))
                })
                .collect();
            scored.sort_by(|a, b| b.0.cmp(&a.0));
            self.filtered = scored.into_iter().map(|(_, i)| i).collect();
        }
        self.selected = 0;
    }

    pub fn element(&self) -> Element {
        let mut list = Element::col().width(Size::Fill);
        for (pos, &index) in self.filtered.iter().take(MAX_VISIBLE).enumerate() {
            let (_, name) = &self.options[index];
            let mut style = Style::new();
            let marker = if pos == self.selected {
                style = style.foreground(ACCENT).bold();
                "> "
            } else {
                "  "
            };
            list = list.child(Element::text(format!("{marker}{name}")).style(style));
        }
        if self.filtered.is_empty() {
            let hint = if self.query.trim().is_empty() {
                "Nothing here yet".to_string()
            } else {
                format!("Enter to create \"{}\"", self.query.trim())
            };
            list = list.child(Element::text(hint).style(Style::new().foreground(MUTED)));
        }

        let query = if self.query.is_empty() {
            Element::text("Type to filter…").style(Style::new().foreground(MUTED))
        } else {
            Element::text(self.query.clone()).style(Style::new().underline())
        };

        Element::col()
            .id("picker-modal")
            .width(Size::Fill)
            .padding(Edges::symmetric(1, 2))
            .gap(1)
            .style(Style::new().background(SURFACE))
            .child(
                Element::text(self.kind.title())
                    .style(Style::new().bold().foreground(ACCENT)),
            )
            .child(query)
            .child(list)
            .child(
                Element::text("↑/↓ move · Enter select · Esc cancel")
                    .style(Style::new().foreground(MUTED)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> Picker {
        Picker::new(
            PickerKind::Author,
            vec![
                (Uuid::new_v4(), "Frank Herbert".to_string()),
                (Uuid::new_v4(), "William Gibson".to_string()),
                (Uuid::new_v4(), "Ursula K. Le Guin".to_string()),
            ],
        )
    }

    #[test]
    fn test_typing_narrows_matches() {
        let mut p = picker();
        for c in "gibs".chars() {
            p.push_char(c);
        }
        match p.choose() {
            PickerOutcome::Chosen(_, name) => assert_eq!(name, "William Gibson"),
            _ => panic!("expected a match"),
        }
    }

    #[test]
    fn test_no_match_offers_creation() {
        let mut p = picker();
        for c in "Stanislaw Lem".chars() {
            p.push_char(c);
        }
        if p.filtered.is_empty() {
            match p.choose() {
                PickerOutcome::CreateNew(name) => assert_eq!(name, "Stanislaw Lem"),
                _ => panic!("expected create"),
            }
        }
    }

    #[test]
    fn test_backspace_restores_options() {
        let mut p = picker();
        p.push_char('z');
        p.push_char('z');
        p.backspace();
        p.backspace();
        assert_eq!(p.filtered.len(), 3);
    }
}
