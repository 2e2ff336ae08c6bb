use crate::state::State;
use anyhow::Result;
use crossterm::{
    event,
    event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
    },
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Mouse(MouseEvent),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(CrosstermEvent::Mouse(mouse)) => {
                        if tx_clone.send(Event::Mouse(mouse)).is_err() {
                            break;
                        }
                    }
                    _ => {}
                },
                Ok(false) => {}
                Err(_) => break,
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => return Ok(Self::handle_key(event, state)),
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(_) = mouse.kind {
                    state.handle_click(mouse.column, mouse.row);
                }
            }
            Event::Tick => {
                state.handle_tick();
            }
        }
        Ok(true)
    }

    /// Route a key press to the state operation it triggers. Returns false
    /// when an exit was requested.
    ///
    fn handle_key(event: KeyEvent, state: &mut State) -> bool {
        // Exit works from every mode.
        if let KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } = event
        {
            debug!("Processing exit terminal event '{:?}'...", event);
            return false;
        }

        // While the preview modal is open, the keyboard reacts solely to
        // the escape signal.
        if state.is_modal_open() {
            if event.code == KeyCode::Esc {
                state.close_preview();
            }
            return true;
        }

        // Search mode: keystrokes edit the query, every edit re-filters.
        if state.is_search_mode() {
            match event.code {
                KeyCode::Esc | KeyCode::Enter => {
                    state.exit_search_mode();
                }
                KeyCode::Backspace => {
                    state.remove_search_char();
                }
                KeyCode::Char(c) => {
                    state.add_search_char(c);
                }
                _ => {}
            }
            return true;
        }

        // Upload input mode: keystrokes edit the candidate file path.
        if state.is_upload_input_active() {
            match event.code {
                KeyCode::Esc => {
                    state.cancel_upload_input();
                }
                KeyCode::Enter => {
                    state.submit_upload_input();
                }
                KeyCode::Backspace => {
                    state.remove_upload_char();
                }
                KeyCode::Char(c) => {
                    state.add_upload_char(c);
                }
                _ => {}
            }
            return true;
        }

        match event.code {
            KeyCode::Char('q') => {
                debug!("Processing exit terminal event '{:?}'...", event);
                return false;
            }
            KeyCode::Char('/') => {
                state.enter_search_mode();
            }
            KeyCode::Char('c') => {
                state.clear_search();
            }
            KeyCode::Char('h') | KeyCode::Left => {
                state.previous_page();
            }
            KeyCode::Char('l') | KeyCode::Right => {
                state.next_page();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                state.jump_to_page(index);
            }
            KeyCode::Char('t') => {
                state.toggle_theme();
            }
            KeyCode::Char('o') => {
                state.open_preview();
            }
            KeyCode::Char('d') => {
                state.reset_attachment();
            }
            KeyCode::Char('u') => {
                state.begin_upload_input();
            }
            KeyCode::Char('r') => {
                state.toggle_log_view();
            }
            _ => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys_request_exit() {
        let mut state = State::default();
        assert!(!Handler::handle_key(key(KeyCode::Char('q')), &mut state));
        assert!(!Handler::handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut state
        ));
    }

    #[test]
    fn test_navigation_keys_move_cursor() {
        let mut state = State::default();
        assert!(Handler::handle_key(key(KeyCode::Char('l')), &mut state));
        assert_eq!(state.current_page_index(), Some(1));
        assert!(Handler::handle_key(key(KeyCode::Char('h')), &mut state));
        assert_eq!(state.current_page_index(), Some(0));
        assert!(Handler::handle_key(key(KeyCode::Char('3')), &mut state));
        assert_eq!(state.current_page_index(), Some(2));
    }

    #[test]
    fn test_digit_beyond_view_is_noop() {
        let mut state = State::default();
        Handler::handle_key(key(KeyCode::Char('9')), &mut state);
        assert_eq!(state.current_page_index(), Some(0));
    }

    #[test]
    fn test_search_mode_captures_characters() {
        let mut state = State::default();
        Handler::handle_key(key(KeyCode::Char('/')), &mut state);
        assert!(state.is_search_mode());

        // 'q' edits the query instead of quitting while searching.
        assert!(Handler::handle_key(key(KeyCode::Char('q')), &mut state));
        assert_eq!(state.get_search_query(), "q");

        Handler::handle_key(key(KeyCode::Backspace), &mut state);
        assert_eq!(state.get_search_query(), "");

        Handler::handle_key(key(KeyCode::Esc), &mut state);
        assert!(!state.is_search_mode());
    }

    #[test]
    fn test_modal_reacts_only_to_escape() {
        let mut state = State::default();
        state.open_preview();

        // Other keys are ignored while the modal is open.
        Handler::handle_key(key(KeyCode::Char('l')), &mut state);
        assert_eq!(state.current_page_index(), Some(0));
        assert!(state.is_modal_open());

        Handler::handle_key(key(KeyCode::Esc), &mut state);
        assert!(!state.is_modal_open());
    }

    #[test]
    fn test_theme_toggle_key() {
        let mut state = State::default();
        Handler::handle_key(key(KeyCode::Char('t')), &mut state);
        assert!(state.is_dark_mode());
        Handler::handle_key(key(KeyCode::Char('t')), &mut state);
        assert!(!state.is_dark_mode());
    }

    #[test]
    fn test_upload_input_mode_routes_path_characters() {
        let mut state = State::default();
        Handler::handle_key(key(KeyCode::Char('u')), &mut state);
        assert!(state.is_upload_input_active());
        Handler::handle_key(key(KeyCode::Char('x')), &mut state);
        assert_eq!(state.get_upload_input(), Some("x"));
        Handler::handle_key(key(KeyCode::Esc), &mut state);
        assert!(!state.is_upload_input_active());
    }
}
