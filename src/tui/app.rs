use crate::cookie::persistence::Persistence;
use crate::page::models::ListElement;
use crate::page::toggle::RowState;
use crate::session::PageSession;
use crate::tui::handlers::{HelpModeAction, KeyHandler, NormalModeAction, SearchModeAction};
use crate::tui::search::SearchState;
use anyhow::Result;
use chrono::Utc;
use crossterm::event::KeyEvent;
use std::path::PathBuf;
use tracing::warn;

pub struct App {
    pub session: PageSession,
    pub selected_index: usize,
    pub should_quit: bool,
    pub help_mode: bool,
    pub search: SearchState,
    pub status: Option<String>,
    save_on_quit: bool,
    jar_path: Option<PathBuf>,
}

impl App {
    /// Runs the load trigger; a restore failure is reported in the status line.
    pub fn new(session: PageSession, jar_path: Option<PathBuf>, save_on_quit: bool) -> Self {
        let mut app = Self {
            session,
            selected_index: 0,
            should_quit: false,
            help_mode: false,
            search: SearchState::new(),
            status: None,
            save_on_quit,
            jar_path,
        };

        match app.session.on_load(Utc::now()) {
            Ok(0) => {}
            Ok(restored) => app.status = Some(format!("Restored {} selected courses", restored)),
            Err(e) => {
                warn!(error = %e, "restoring selection failed");
                app.status = Some(format!("Could not restore selection: {}", e));
            }
        }
        app
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            self.handle_help_mode_key(key_event);
            Ok(())
        } else if self.search.search_mode {
            self.handle_search_mode_key(key_event)
        } else {
            self.handle_normal_mode_key(key_event)
        }
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) -> Result<()> {
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Quit => self.quit()?,
            NormalModeAction::ClearSearch => {
                self.search.cancel_search();
                self.apply_search()?;
            }
            NormalModeAction::MoveSelectionUp => self.move_selection_up(),
            NormalModeAction::MoveSelectionDown => self.move_selection_down(),
            NormalModeAction::ToggleRow => self.toggle_selected_row()?,
            NormalModeAction::Submit => self.submit()?,
            NormalModeAction::EnterSearchMode => self.search.enter_search_mode(),
            NormalModeAction::ToggleHelpMode => self.help_mode = true,
            NormalModeAction::None => {}
        }
        Ok(())
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        if KeyHandler::handle_help_mode_key(key_event) == HelpModeAction::ExitHelpMode {
            self.help_mode = false;
        }
    }

    fn handle_search_mode_key(&mut self, key_event: KeyEvent) -> Result<()> {
        match KeyHandler::handle_search_mode_key(key_event) {
            SearchModeAction::CancelSearch => {
                self.search.cancel_search();
                self.apply_search()
            }
            SearchModeAction::ConfirmSearch => {
                self.search.confirm_search();
                Ok(())
            }
            SearchModeAction::Backspace => {
                if self.search.backspace() {
                    self.apply_search()?;
                }
                Ok(())
            }
            SearchModeAction::InsertChar(c) => {
                self.search.insert_char(c);
                self.apply_search()
            }
            SearchModeAction::None => Ok(()),
        }
    }

    /// The filter runs on every change of the search box.
    fn apply_search(&mut self) -> Result<()> {
        self.session.on_input(&self.search.search_query)?;
        self.clamp_selection();
        Ok(())
    }

    pub fn visible_rows(&self) -> Vec<&ListElement> {
        self.session.page().visible_elements().collect()
    }

    fn clamp_selection(&mut self) {
        let visible = self.visible_rows().len();
        if self.selected_index >= visible {
            self.selected_index = visible.saturating_sub(1);
        }
    }

    fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_rows().len() {
            self.selected_index += 1;
        }
    }

    fn toggle_selected_row(&mut self) -> Result<()> {
        let Some(element_id) = self
            .visible_rows()
            .get(self.selected_index)
            .map(|element| element.id.clone())
        else {
            return Ok(());
        };

        let transition = self.session.on_toggle(&element_id)?;
        let row_id = &self.session.page().element(&element_id)?.row_id;
        self.status = Some(match transition.to {
            RowState::Checked => format!("Selected {}", row_id),
            RowState::Unchecked => format!("Deselected {}", row_id),
        });
        Ok(())
    }

    fn submit(&mut self) -> Result<()> {
        let cookie = self.session.on_submit(Utc::now());
        if let Some(path) = &self.jar_path {
            self.session.jar().save_to_file(path)?;
        }
        self.status = Some(format!(
            "Saved {} courses (until {})",
            self.session.selection().len(),
            cookie.expires.format("%Y-%m-%d")
        ));
        Ok(())
    }

    fn quit(&mut self) -> Result<()> {
        if self.save_on_quit {
            self.submit()?;
        }
        self.should_quit = true;
        Ok(())
    }

    pub fn total_rows(&self) -> usize {
        self.session.page().total_rows()
    }

    pub fn selected_rows(&self) -> usize {
        self.session.selection().len()
    }
}
