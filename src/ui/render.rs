use ratatui::{
	Frame,
	layout::{Constraint, Direction, Layout, Margin, Rect},
	text::{Line, Span},
	widgets::Paragraph,
};

use super::App;
use super::components::{
	InputContext, ResultsContext, StatusState, SuggestionOverlay, TabBarContext, TabItem,
	render_input, render_results, render_tab_bar,
};
use super::state::{Focus, ScreenLayout};

const INPUT_HEIGHT: u16 = 3;

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let error_height = u16::from(self.state().error.is_some());
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(INPUT_HEIGHT),
				Constraint::Length(error_height),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		self.render_tabs(frame, layout[0]);
		self.render_query(frame, layout[1]);
		self.render_error(frame, layout[2]);
		self.render_results_pane(frame, layout[3]);
		self.render_footer(frame, layout[4]);

		let overlay = if self.overlay_visible() {
			SuggestionOverlay::area(layout[1], area, self.ui.suggestions().len())
		} else {
			None
		};
		if let Some(overlay_area) = overlay {
			let widget = SuggestionOverlay::new(self.ui.suggestions(), &self.theme)
				.highlighted(self.suggestion_cursor);
			frame.render_widget(widget, overlay_area);
		}

		self.layout = ScreenLayout {
			tabs: layout[0],
			input: layout[1],
			results: layout[3],
			overlay,
		};
	}

	pub(crate) fn tab_items(&self) -> Vec<TabItem<'_>> {
		self.ui
			.tabs()
			.iter()
			.map(|tab| TabItem {
				mode: tab.mode,
				label: tab.tab_label.as_str(),
				loading: self.tabs.session(tab.mode).state().is_loading,
			})
			.collect()
	}

	fn render_tabs(&self, frame: &mut Frame, area: Rect) {
		let items = self.tab_items();
		let busy = self.tabs.any_loading();
		render_tab_bar(
			frame,
			TabBarContext {
				title: &self.ui.title,
				mode: self.mode(),
				tabs: &items,
				area,
				theme: &self.theme,
			},
			StatusState {
				status_text: if busy { "Searching..." } else { "" },
				busy,
				throbber_state: &self.throbber_state,
			},
		);
	}

	fn render_query(&self, frame: &mut Frame, area: Rect) {
		render_input(
			frame,
			InputContext {
				query: &self.state().query,
				placeholder: &self.ui.placeholder,
				focused: self.focus == Focus::Input,
				can_submit: self.tabs.active_session().can_submit(),
				area,
				theme: &self.theme,
			},
		);
	}

	fn render_error(&self, frame: &mut Frame, area: Rect) {
		let Some(message) = self.state().error.as_deref() else {
			return;
		};
		let banner = Paragraph::new(Span::styled(message, self.theme.error_style()));
		frame.render_widget(banner, area);
	}

	fn render_results_pane(&mut self, frame: &mut Frame, area: Rect) {
		let mode = self.mode();
		let mut list_state = self.list_state_mut(mode).clone();
		let session = self.tabs.active_session();
		render_results(
			frame,
			ResultsContext {
				title: &self.ui.results_title,
				results: &session.state().results,
				phase: session.phase(),
				focused: self.focus == Focus::Results,
				area,
				theme: &self.theme,
				throbber_state: &self.throbber_state,
			},
			&mut list_state,
		);
		*self.list_state_mut(mode) = list_state;
	}

	fn render_footer(&self, frame: &mut Frame, area: Rect) {
		let hints = match self.focus {
			Focus::Input => "enter search  ↑/↓ suggestions  tab mode  esc results  ctrl-c quit",
			Focus::Results => "↑/↓ move  enter accept  / edit  tab mode  q quit",
		};
		let footer = Paragraph::new(Line::from(Span::styled(hints, self.theme.empty_style())));
		frame.render_widget(footer, area);
	}
}
