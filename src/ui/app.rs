use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use crate::config::{ConfigStore, ThemeMode};
use crate::content::projects;
use crate::content::sections::SectionId;
use crate::ui::backdrop::Backdrop;
use crate::ui::contact::{ContactFormState, ContactIntent, ContactReducer};
use crate::ui::gallery::{GalleryIntent, GalleryReducer, GalleryState};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavIntent, NavReducer, NavState};
use crate::ui::theme::Palette;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    }};
}

/// Application controller: owns every subsystem state and translates
/// gestures into intents. This is the only place state mutation happens.
pub struct App {
    should_quit: bool,
    started: Instant,
    last_tick_ms: u64,
    size: (u16, u16),
    nav: NavState,
    gallery: GalleryState,
    contact: ContactFormState,
    backdrop: Backdrop,
    theme: ThemeMode,
    config: ConfigStore,
}

impl App {
    pub fn new(config: ConfigStore, theme_override: Option<ThemeMode>) -> Self {
        let theme = theme_override.unwrap_or(config.get().theme);
        Self {
            should_quit: false,
            started: Instant::now(),
            last_tick_ms: 0,
            size: (0, 0),
            nav: NavState::default(),
            gallery: GalleryState::default(),
            contact: ContactFormState::default(),
            backdrop: Backdrop::new(),
            theme,
            config,
        }
    }

    /// Milliseconds since app start; every reducer timestamp comes from here.
    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    pub fn contact(&self) -> &ContactFormState {
        &self.contact
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn palette(&self) -> &'static Palette {
        Palette::of(self.theme)
    }

    pub fn on_tick(&mut self) {
        let now_ms = self.now_ms();
        let dt = now_ms.saturating_sub(self.last_tick_ms);
        self.last_tick_ms = now_ms;

        dispatch_mvi!(self, nav, NavReducer, NavIntent::Tick { now_ms });
        dispatch_mvi!(self, contact, ContactReducer, ContactIntent::Tick { now_ms });
        self.backdrop.advance(dt);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Moved = mouse.kind {
            let (cols, rows) = self.size;
            self.backdrop.set_pointer(mouse.column, mouse.row, cols, rows);
        }
    }

    /// The navigation dispatcher: key gesture in, intent out.
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        // Global chords work everywhere, including inside the contact form.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') => self.request_quit(),
                KeyCode::Char('b') => dispatch_mvi!(self, nav, NavReducer, NavIntent::ToggleMenu),
                KeyCode::Char('t') => self.toggle_theme(),
                _ => {}
            }
            return;
        }

        if self.nav.menu_open {
            self.on_menu_key(key);
            return;
        }

        // A pending confirmation swallows the next key.
        if matches!(self.contact, ContactFormState::Sent { .. }) {
            dispatch_mvi!(self, contact, ContactReducer, ContactIntent::Dismiss);
            return;
        }

        let active = self.nav.active_section();
        match active {
            SectionId::Contact => self.on_contact_key(key),
            SectionId::Projects => self.on_projects_key(key),
            _ => self.on_section_key(key),
        }
    }

    fn on_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => dispatch_mvi!(self, nav, NavReducer, NavIntent::MenuUp),
            KeyCode::Down => dispatch_mvi!(self, nav, NavReducer, NavIntent::MenuDown),
            KeyCode::Enter => {
                let target = SectionId::ALL[self.nav.menu_selected];
                self.navigate(target.as_str());
            }
            KeyCode::Esc => dispatch_mvi!(self, nav, NavReducer, NavIntent::ToggleMenu),
            _ => {}
        }
    }

    fn on_contact_key(&mut self, key: KeyEvent) {
        if self.contact.is_busy() {
            return;
        }
        match key.code {
            KeyCode::Char(ch) => dispatch_mvi!(self, contact, ContactReducer, ContactIntent::Input(ch)),
            KeyCode::Backspace => dispatch_mvi!(self, contact, ContactReducer, ContactIntent::Backspace),
            KeyCode::Tab => dispatch_mvi!(self, contact, ContactReducer, ContactIntent::FocusNext),
            KeyCode::BackTab => dispatch_mvi!(self, contact, ContactReducer, ContactIntent::FocusPrev),
            KeyCode::Enter => {
                let now_ms = self.now_ms();
                dispatch_mvi!(self, contact, ContactReducer, ContactIntent::Submit { now_ms });
            }
            KeyCode::Esc => self.request_quit(),
            _ => {}
        }
    }

    fn on_projects_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.cycle_category(-1),
            KeyCode::Right => self.cycle_category(1),
            _ => self.on_section_key(key),
        }
    }

    fn on_section_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(digit @ '1'..='7') => {
                let idx = digit as usize - '1' as usize;
                self.navigate(SectionId::ALL[idx].as_str());
            }
            KeyCode::Tab => {
                let next = self.nav.active_section().next();
                self.navigate(next.as_str());
            }
            KeyCode::BackTab => {
                let prev = self.nav.active_section().prev();
                self.navigate(prev.as_str());
            }
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            _ => {}
        }
    }

    /// Activate a navigation target. Unknown ids and the already-active
    /// section fall out of the reducer as no-ops.
    pub fn navigate(&mut self, target: &str) {
        let now_ms = self.now_ms();
        dispatch_mvi!(
            self,
            nav,
            NavReducer,
            NavIntent::Navigate {
                target: target.to_string(),
                now_ms,
            }
        );
    }

    fn cycle_category(&mut self, step: isize) {
        let categories = projects::categories();
        let current = categories
            .iter()
            .position(|&cat| cat == self.gallery.selected)
            .unwrap_or(0);
        let len = categories.len() as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        let now_ms = self.now_ms();
        dispatch_mvi!(
            self,
            gallery,
            GalleryReducer,
            GalleryIntent::SelectCategory {
                category: categories[next].to_string(),
                now_ms,
            }
        );
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.config.set_theme(self.theme);
        tracing::info!(dark = self.theme.is_dark(), "theme toggled");
    }
}
