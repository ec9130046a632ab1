//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Paging
    PrevPage,
    NextPage,
    Refresh,

    // List
    ScrollUp,
    ScrollDown,

    // Create
    CreateSample,

    // Filters
    OpenFilterInput,
    FilterChar(char),
    FilterBackspace,
    NextFilterField,
    ApplyFilters,
    CancelFilterInput,
    ClearFilters,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Field edited in the filter popup
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FilterField {
    #[default]
    Search,
    Skills,
    Experience,
    Location,
}

impl FilterField {
    pub fn next(&self) -> FilterField {
        match self {
            FilterField::Search => FilterField::Skills,
            FilterField::Skills => FilterField::Experience,
            FilterField::Experience => FilterField::Location,
            FilterField::Location => FilterField::Search,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Search => "Search",
            FilterField::Skills => "Skills",
            FilterField::Experience => "Min experience",
            FilterField::Location => "Location",
        }
    }
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    show_help: bool,
    show_filter_input: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // Popups first
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if show_filter_input {
        return match key.code {
            KeyCode::Esc => Some(UiEvent::CancelFilterInput),
            KeyCode::Enter => Some(UiEvent::ApplyFilters),
            KeyCode::Tab => Some(UiEvent::NextFilterField),
            KeyCode::Backspace => Some(UiEvent::FilterBackspace),
            KeyCode::Char(c) => Some(UiEvent::FilterChar(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Left | KeyCode::Char('[') => Some(UiEvent::PrevPage),
        KeyCode::Right | KeyCode::Char(']') => Some(UiEvent::NextPage),
        KeyCode::Up => Some(UiEvent::ScrollUp),
        KeyCode::Down => Some(UiEvent::ScrollDown),
        KeyCode::Char('c') => Some(UiEvent::CreateSample),
        KeyCode::Char('r') => Some(UiEvent::Refresh),
        KeyCode::Char('/') => Some(UiEvent::OpenFilterInput),
        KeyCode::Char('x') => Some(UiEvent::ClearFilters),
        _ => None,
    }
}
