use crate::app::{ConfigSaveSender, WorkerEventSender};
use crate::content::{self, TopicPage, DIAGRAM_DEFINITION};
use crate::events::worker::Event as WorkerEvent;
use crate::state::filter::filter_pages;
use crate::state::media::Attachment;
use crate::ui::Theme;
use image::DynamicImage;
use log::*;
use ratatui::layout::Rect;
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use std::path::PathBuf;

/// Ticks to wait after the workflow page becomes visible before asking the
/// worker for a diagram render, so layout settles first.
///
const DIAGRAM_RENDER_DELAY_TICKS: u8 = 2;

/// Lifecycle of the embedded workflow diagram render.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramStatus {
    /// No render has been requested yet.
    NotRequested,
    /// A render request is in flight on the worker.
    Pending,
    /// The external renderer produced text output.
    Rendered(String),
    /// The external renderer is missing or failed; show the raw definition.
    Unavailable,
}

/// Houses data representative of application state.
///
pub struct State {
    worker_sender: Option<WorkerEventSender>,
    config_save_sender: Option<ConfigSaveSender>,
    terminal_size: Rect,
    catalog: Vec<TopicPage>,
    filtered_pages: Vec<TopicPage>,
    current_page: usize,
    search_query: String,
    search_mode: bool,
    upload_input: Option<String>, // Some while the user is typing a file path
    attachment: Attachment,
    attachment_protocol: Option<Box<dyn StatefulProtocol>>,
    picker: Option<Picker>,
    modal_open: bool,
    modal_area: Option<Rect>, // set during render, used for click-outside
    upload_error: Option<String>,
    is_dark: bool,
    theme: Theme,
    diagram: DiagramStatus,
    diagram_delay: Option<u8>,
    show_log: bool,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        let catalog = content::catalog();
        State {
            worker_sender: None,
            config_save_sender: None,
            terminal_size: Rect::default(),
            filtered_pages: catalog.clone(),
            catalog,
            current_page: 0,
            search_query: String::new(),
            search_mode: false,
            upload_input: None,
            attachment: Attachment::default_image(),
            attachment_protocol: None,
            picker: None,
            modal_open: false,
            modal_area: None,
            upload_error: None,
            is_dark: false,
            theme: Theme::light(),
            diagram: DiagramStatus::NotRequested,
            diagram_delay: None,
            show_log: false,
        }
    }
}

impl State {
    pub fn new(
        worker_sender: WorkerEventSender,
        config_save_sender: ConfigSaveSender,
        is_dark: bool,
    ) -> Self {
        State {
            worker_sender: Some(worker_sender),
            config_save_sender: Some(config_save_sender),
            is_dark,
            theme: Theme::from_dark(is_dark),
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Whether dark mode is active.
    ///
    pub fn is_dark_mode(&self) -> bool {
        self.is_dark
    }

    /// Flip the theme preference, apply the matching palette, and request
    /// persistence. The palette swap happens before the save request so the
    /// next frame already renders in the new mode.
    ///
    pub fn toggle_theme(&mut self) -> &mut Self {
        self.is_dark = !self.is_dark;
        self.theme = Theme::from_dark(self.is_dark);
        info!(
            "Switched to {} mode.",
            if self.is_dark { "dark" } else { "light" }
        );
        self.request_config_save();
        self
    }

    /// Record the current terminal dimensions.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    // --- Search & pagination -------------------------------------------------

    /// Enter search mode (keystrokes edit the query).
    ///
    pub fn enter_search_mode(&mut self) -> &mut Self {
        self.search_mode = true;
        self
    }

    /// Leave search mode, keeping the query and its filter active.
    ///
    pub fn exit_search_mode(&mut self) -> &mut Self {
        self.search_mode = false;
        self
    }

    pub fn is_search_mode(&self) -> bool {
        self.search_mode
    }

    pub fn get_search_query(&self) -> &str {
        &self.search_query
    }

    /// Add a character to the search query.
    ///
    pub fn add_search_char(&mut self, c: char) -> &mut Self {
        self.search_query.push(c);
        self.update_filtered_pages();
        self
    }

    /// Remove the last character from the search query.
    ///
    pub fn remove_search_char(&mut self) -> &mut Self {
        self.search_query.pop();
        self.update_filtered_pages();
        self
    }

    /// Clear the query and reset the cursor in one step.
    ///
    pub fn clear_search(&mut self) -> &mut Self {
        self.search_mode = false;
        self.search_query.clear();
        self.update_filtered_pages();
        self
    }

    /// Recompute the filtered view and reconcile the cursor. A changed filter
    /// invalidates positional meaning, so the cursor always resets to the
    /// first page of the new view.
    ///
    fn update_filtered_pages(&mut self) {
        self.filtered_pages = filter_pages(&self.catalog, &self.search_query);
        self.current_page = 0;
    }

    /// Pages matching the current query, in catalog order.
    ///
    pub fn filtered_pages(&self) -> &[TopicPage] {
        &self.filtered_pages
    }

    /// The page under the cursor, or None when the filter matched nothing.
    ///
    pub fn selected_page(&self) -> Option<&TopicPage> {
        self.filtered_pages.get(self.current_page)
    }

    /// Cursor position within the filtered view, absent when it is empty.
    ///
    pub fn current_page_index(&self) -> Option<usize> {
        if self.filtered_pages.is_empty() {
            None
        } else {
            Some(self.current_page)
        }
    }

    /// Advance to the next page. Saturates at the last page.
    ///
    pub fn next_page(&mut self) -> &mut Self {
        if self.current_page + 1 < self.filtered_pages.len() {
            self.current_page += 1;
        }
        self
    }

    /// Step back to the previous page. Saturates at the first page.
    ///
    pub fn previous_page(&mut self) -> &mut Self {
        if self.current_page > 0 {
            self.current_page -= 1;
        }
        self
    }

    /// Jump straight to a page index. Out-of-range requests are a no-op: the
    /// affordance that issued them may be stale against the current view.
    ///
    pub fn jump_to_page(&mut self, index: usize) -> &mut Self {
        if index < self.filtered_pages.len() {
            self.current_page = index;
        }
        self
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page + 1 < self.filtered_pages.len()
    }

    pub fn can_go_previous(&self) -> bool {
        !self.filtered_pages.is_empty() && self.current_page > 0
    }

    // --- Attachment & modal --------------------------------------------------

    pub fn get_attachment(&self) -> &Attachment {
        &self.attachment
    }

    /// Source path of the custom attachment, if any. Persisted so the image
    /// can be re-attached on the next start.
    ///
    pub fn custom_image_path(&self) -> Option<PathBuf> {
        self.attachment.path.clone()
    }

    pub fn get_upload_error(&self) -> Option<&str> {
        self.upload_error.as_deref()
    }

    /// Store the terminal graphics picker once the backend capabilities are
    /// known. Needed before any custom image can be displayed.
    ///
    pub fn set_picker(&mut self, picker: Picker) -> &mut Self {
        self.picker = Some(picker);
        self
    }

    /// Render protocol for the custom image, if one is loaded.
    ///
    pub fn attachment_protocol_mut(&mut self) -> Option<&mut Box<dyn StatefulProtocol>> {
        self.attachment_protocol.as_mut()
    }

    /// Ask the worker to validate and encode a candidate image file.
    ///
    pub fn request_ingest(&mut self, path: PathBuf) -> &mut Self {
        self.send_worker_event(WorkerEvent::IngestImage {
            path,
            open_preview: true,
        });
        self
    }

    /// Replace the attachment wholesale after a successful encode and open
    /// the preview when the ingest was user-triggered. Clears any previous
    /// rejection message.
    ///
    pub fn apply_ingest(
        &mut self,
        attachment: Attachment,
        decoded: Option<DynamicImage>,
        open_preview: bool,
    ) -> &mut Self {
        self.attachment_protocol = match (self.picker.as_mut(), decoded) {
            (Some(picker), Some(img)) => Some(picker.new_resize_protocol(img)),
            _ => None,
        };
        self.attachment = attachment;
        self.upload_error = None;
        self.modal_open = open_preview;
        self.request_config_save();
        self
    }

    /// Record a validation rejection: the existing attachment is untouched,
    /// the modal is forced closed, and the reason is surfaced for display.
    ///
    pub fn reject_ingest(&mut self, reason: &crate::state::MediaError) -> &mut Self {
        warn!("Rejected image upload: {}", reason);
        self.upload_error = Some(reason.to_string());
        self.modal_open = false;
        self
    }

    /// Restore the built-in default attachment and close the modal.
    /// Idempotent.
    ///
    pub fn reset_attachment(&mut self) -> &mut Self {
        self.attachment = Attachment::default_image();
        self.attachment_protocol = None;
        self.upload_error = None;
        self.modal_open = false;
        self.request_config_save();
        self
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn open_preview(&mut self) -> &mut Self {
        self.modal_open = true;
        self
    }

    pub fn close_preview(&mut self) -> &mut Self {
        self.modal_open = false;
        self
    }

    /// Record where the modal content was drawn, for click-outside dismissal.
    ///
    pub fn set_modal_area(&mut self, area: Option<Rect>) -> &mut Self {
        self.modal_area = area;
        self
    }

    /// Handle a mouse press: a click outside the modal content region closes
    /// the preview. Clicks while no modal is open are ignored.
    ///
    pub fn handle_click(&mut self, column: u16, row: u16) -> &mut Self {
        if !self.modal_open {
            return self;
        }
        let inside = self.modal_area.map_or(false, |area| {
            column >= area.x
                && column < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
        });
        if !inside {
            self.close_preview();
        }
        self
    }

    // --- Upload path input ---------------------------------------------------

    pub fn is_upload_input_active(&self) -> bool {
        self.upload_input.is_some()
    }

    pub fn get_upload_input(&self) -> Option<&str> {
        self.upload_input.as_deref()
    }

    pub fn begin_upload_input(&mut self) -> &mut Self {
        self.upload_input = Some(String::new());
        self
    }

    pub fn cancel_upload_input(&mut self) -> &mut Self {
        self.upload_input = None;
        self
    }

    pub fn add_upload_char(&mut self, c: char) -> &mut Self {
        if let Some(input) = self.upload_input.as_mut() {
            input.push(c);
        }
        self
    }

    pub fn remove_upload_char(&mut self) -> &mut Self {
        if let Some(input) = self.upload_input.as_mut() {
            input.pop();
        }
        self
    }

    /// Submit the typed path to the ingest pipeline. An empty path simply
    /// closes the input.
    ///
    pub fn submit_upload_input(&mut self) -> &mut Self {
        if let Some(input) = self.upload_input.take() {
            let path = input.trim().to_string();
            if !path.is_empty() {
                self.request_ingest(PathBuf::from(path));
            }
        }
        self
    }

    // --- Diagram -------------------------------------------------------------

    pub fn diagram_status(&self) -> &DiagramStatus {
        &self.diagram
    }

    pub fn set_diagram_rendered(&mut self, output: String) -> &mut Self {
        self.diagram = DiagramStatus::Rendered(output);
        self
    }

    pub fn set_diagram_unavailable(&mut self) -> &mut Self {
        self.diagram = DiagramStatus::Unavailable;
        self
    }

    /// Advance tick-driven work: once the workflow page has been visible for
    /// a couple of ticks, request a diagram render from the worker. Leaving
    /// the page cancels a pending delay (but not an in-flight render; its
    /// completion is stored and shown whenever the page is next visible).
    ///
    pub fn handle_tick(&mut self) -> &mut Self {
        let on_diagram_page = self
            .selected_page()
            .map(|page| page.is_diagram_page)
            .unwrap_or(false);
        if !on_diagram_page {
            self.diagram_delay = None;
            return self;
        }
        if self.diagram != DiagramStatus::NotRequested {
            return self;
        }
        match self.diagram_delay {
            None => self.diagram_delay = Some(DIAGRAM_RENDER_DELAY_TICKS),
            Some(0) => {
                self.diagram_delay = None;
                self.diagram = DiagramStatus::Pending;
                self.send_worker_event(WorkerEvent::RenderDiagram {
                    definition: DIAGRAM_DEFINITION.to_string(),
                });
            }
            Some(remaining) => self.diagram_delay = Some(remaining - 1),
        }
        self
    }

    // --- Log view ------------------------------------------------------------

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log_view(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    // --- Plumbing ------------------------------------------------------------

    fn send_worker_event(&self, event: WorkerEvent) {
        if let Some(sender) = &self.worker_sender {
            if let Err(e) = sender.send(event) {
                error!("Failed to send worker event: {}", e);
            }
        }
    }

    fn request_config_save(&self) {
        if let Some(sender) = &self.config_save_sender {
            if let Err(e) = sender.send(()) {
                error!("Failed to request config save: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::media::{AttachmentSource, MediaError};
    use std::sync::mpsc;

    fn state_with_channels() -> (
        State,
        mpsc::Receiver<WorkerEvent>,
        mpsc::Receiver<()>,
    ) {
        let (worker_tx, worker_rx) = mpsc::channel();
        let (save_tx, save_rx) = mpsc::channel();
        (State::new(worker_tx, save_tx, false), worker_rx, save_rx)
    }

    fn custom_attachment() -> Attachment {
        Attachment {
            source: AttachmentSource::Encoded("data:image/jpeg;base64,".to_string()),
            display_name: "map.jpg".to_string(),
            path: Some(PathBuf::from("/tmp/map.jpg")),
            uploaded_at: None,
        }
    }

    #[test]
    fn test_default_state_shows_full_catalog() {
        let state = State::default();
        assert_eq!(state.filtered_pages().len(), 6);
        assert_eq!(state.current_page_index(), Some(0));
        assert!(!state.is_modal_open());
        assert!(!state.is_dark_mode());
    }

    #[test]
    fn test_query_edit_resets_cursor() {
        let mut state = State::default();
        state.jump_to_page(3);
        state.add_search_char('e');
        assert_eq!(state.current_page_index(), Some(0));
        state.remove_search_char();
        assert_eq!(state.current_page_index(), Some(0));
        assert_eq!(state.filtered_pages().len(), 6);
    }

    #[test]
    fn test_cursor_stays_in_bounds_after_filter() {
        let mut state = State::default();
        state.jump_to_page(5);
        for c in "hourly".chars() {
            state.add_search_char(c);
        }
        assert_eq!(state.filtered_pages().len(), 1);
        assert_eq!(state.current_page_index(), Some(0));
        assert_eq!(state.selected_page().unwrap().id, "automation");
        assert!(!state.can_go_next());
        assert!(!state.can_go_previous());
    }

    #[test]
    fn test_navigation_saturates_at_boundaries() {
        let mut state = State::default();
        state.previous_page();
        assert_eq!(state.current_page_index(), Some(0));

        for _ in 0..10 {
            state.next_page();
        }
        assert_eq!(state.current_page_index(), Some(5));
        state.next_page();
        assert_eq!(state.current_page_index(), Some(5));
    }

    #[test]
    fn test_jump_out_of_range_is_silent_noop() {
        let mut state = State::default();
        state.jump_to_page(2);
        state.jump_to_page(99);
        assert_eq!(state.current_page_index(), Some(2));
    }

    #[test]
    fn test_no_match_exposes_no_results_state() {
        let mut state = State::default();
        for c in "zzz-no-match".chars() {
            state.add_search_char(c);
        }
        assert!(state.filtered_pages().is_empty());
        assert_eq!(state.current_page_index(), None);
        assert!(state.selected_page().is_none());
        assert!(!state.can_go_next());
        assert!(!state.can_go_previous());

        state.clear_search();
        assert_eq!(state.filtered_pages().len(), 6);
        assert_eq!(state.current_page_index(), Some(0));
    }

    #[test]
    fn test_apply_ingest_replaces_attachment_and_opens_modal() {
        let mut state = State::default();
        state.reject_ingest(&MediaError::TooLarge);
        assert!(state.get_upload_error().is_some());

        state.apply_ingest(custom_attachment(), None, true);
        assert!(state.get_attachment().is_custom());
        assert!(state.is_modal_open());
        assert!(state.get_upload_error().is_none());
    }

    #[test]
    fn test_startup_ingest_keeps_modal_closed() {
        let mut state = State::default();
        state.apply_ingest(custom_attachment(), None, false);
        assert!(state.get_attachment().is_custom());
        assert!(!state.is_modal_open());
    }

    #[test]
    fn test_reject_ingest_keeps_previous_attachment() {
        let mut state = State::default();
        state.apply_ingest(custom_attachment(), None, true);
        state.reject_ingest(&MediaError::UnsupportedType);
        assert!(state.get_attachment().is_custom());
        assert!(!state.is_modal_open());
        assert_eq!(
            state.get_upload_error(),
            Some("Please select a valid image file.")
        );
    }

    #[test]
    fn test_reset_attachment_is_idempotent() {
        let mut state = State::default();
        state.apply_ingest(custom_attachment(), None, true);
        state.reset_attachment();
        let after_once = state.get_attachment().clone();
        state.reset_attachment();
        assert_eq!(state.get_attachment(), &after_once);
        assert_eq!(state.get_attachment(), &Attachment::default_image());
        assert!(!state.is_modal_open());
        assert!(state.get_upload_error().is_none());
    }

    #[test]
    fn test_click_outside_modal_closes_it() {
        let mut state = State::default();
        state.open_preview();
        state.set_modal_area(Some(Rect::new(10, 5, 40, 20)));

        // Inside the content region: stays open.
        state.handle_click(20, 10);
        assert!(state.is_modal_open());

        // Outside: closes.
        state.handle_click(1, 1);
        assert!(!state.is_modal_open());
    }

    #[test]
    fn test_toggle_theme_twice_ends_light_with_two_saves() {
        let (mut state, _worker_rx, save_rx) = state_with_channels();
        assert!(!state.is_dark_mode());

        state.toggle_theme();
        assert!(state.is_dark_mode());
        save_rx.recv().unwrap();

        state.toggle_theme();
        assert!(!state.is_dark_mode());
        save_rx.recv().unwrap();
        assert!(save_rx.try_recv().is_err());
    }

    #[test]
    fn test_tick_requests_diagram_render_after_delay() {
        let (mut state, worker_rx, _save_rx) = state_with_channels();
        state.jump_to_page(4);
        assert!(state.selected_page().unwrap().is_diagram_page);

        // One tick arms the delay, the following ticks count it down.
        for _ in 0..=(DIAGRAM_RENDER_DELAY_TICKS + 1) {
            state.handle_tick();
        }
        assert_eq!(state.diagram_status(), &DiagramStatus::Pending);
        assert!(matches!(
            worker_rx.try_recv().unwrap(),
            WorkerEvent::RenderDiagram { .. }
        ));

        // Further ticks do not request again.
        state.handle_tick();
        assert!(worker_rx.try_recv().is_err());
    }

    #[test]
    fn test_tick_off_diagram_page_disarms_delay() {
        let (mut state, worker_rx, _save_rx) = state_with_channels();
        state.jump_to_page(4);
        state.handle_tick();
        state.jump_to_page(0);
        for _ in 0..10 {
            state.handle_tick();
        }
        assert_eq!(state.diagram_status(), &DiagramStatus::NotRequested);
        assert!(worker_rx.try_recv().is_err());
    }

    #[test]
    fn test_upload_input_submit_sends_ingest_request() {
        let (mut state, worker_rx, _save_rx) = state_with_channels();
        state.begin_upload_input();
        for c in "/tmp/map.jpg".chars() {
            state.add_upload_char(c);
        }
        state.submit_upload_input();
        assert!(!state.is_upload_input_active());
        match worker_rx.try_recv().unwrap() {
            WorkerEvent::IngestImage { path, open_preview } => {
                assert_eq!(path, PathBuf::from("/tmp/map.jpg"));
                assert!(open_preview);
            }
            other => panic!("unexpected worker event: {:?}", other),
        }
    }

    #[test]
    fn test_empty_upload_input_sends_nothing() {
        let (mut state, worker_rx, _save_rx) = state_with_channels();
        state.begin_upload_input();
        state.add_upload_char(' ');
        state.submit_upload_input();
        assert!(worker_rx.try_recv().is_err());
    }
}
