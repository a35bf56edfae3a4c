use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Tabs;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::search::SearchMode;
use crate::ui::theme::Theme;

/// Marker appended to tabs whose request is still in flight.
const LOADING_MARKER: &str = " …";

/// Render metadata for a tab header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabItem<'a> {
	pub mode: SearchMode,
	pub label: &'a str,
	pub loading: bool,
}

impl TabItem<'_> {
	fn title(&self) -> String {
		if self.loading {
			format!(" {}{LOADING_MARKER} ", self.label)
		} else {
			format!(" {} ", self.label)
		}
	}

	/// Cells taken by the title plus its trailing padding.
	fn width(&self) -> u16 {
		self.title().width() as u16 + 1
	}
}

/// Argument bundle for rendering the tab bar.
pub struct TabBarContext<'a> {
	pub title: &'a str,
	pub mode: SearchMode,
	pub tabs: &'a [TabItem<'a>],
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Status shown to the right of the tab bar.
pub struct StatusState<'a> {
	pub status_text: &'a str,
	pub busy: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the title on the left, tabs in the middle and status on the right.
pub fn render_tab_bar(frame: &mut Frame, context: TabBarContext<'_>, status: StatusState<'_>) {
	let TabBarContext {
		title,
		mode,
		tabs,
		area,
		theme,
	} = context;

	let [title_area, tabs_area, status_area] = split_tab_bar(area, title, tabs);

	if !title.is_empty() {
		let prompt = ratatui::widgets::Paragraph::new(format!("{title} > "))
			.style(theme.prompt_style());
		frame.render_widget(prompt, title_area);
	}

	let selected = selected_tab_index(mode, tabs);
	let tab_titles = build_tab_titles(theme, selected, tabs);
	let widget = Tabs::new(tab_titles)
		.select(selected)
		.divider("")
		.padding("", " ")
		.highlight_style(theme.tab_highlight_style());
	frame.render_widget(widget, tabs_area);

	render_status(frame, status_area, status, theme);
}

/// Resolve which tab, if any, sits under `column` of the tab bar.
#[must_use]
pub fn tab_at(area: Rect, title: &str, tabs: &[TabItem<'_>], column: u16) -> Option<SearchMode> {
	let [_, tabs_area, _] = split_tab_bar(area, title, tabs);
	if column < tabs_area.x || column >= tabs_area.right() {
		return None;
	}
	let mut x = tabs_area.x;
	for tab in tabs {
		let end = x.saturating_add(tab.width());
		if column < end {
			return Some(tab.mode);
		}
		x = end;
	}
	None
}

fn split_tab_bar(area: Rect, title: &str, tabs: &[TabItem<'_>]) -> [Rect; 3] {
	let title_width = calculate_title_width(title);
	let tabs_width = calculate_tabs_width(tabs);
	let layout = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(title_width),
			Constraint::Length(tabs_width),
			Constraint::Min(0),
		])
		.split(area);
	[layout[0], layout[1], layout[2]]
}

fn calculate_title_width(title: &str) -> u16 {
	if title.is_empty() {
		0
	} else {
		title.width() as u16 + 3
	}
}

fn selected_tab_index(mode: SearchMode, tabs: &[TabItem<'_>]) -> usize {
	tabs.iter().position(|tab| tab.mode == mode).unwrap_or(0)
}

fn build_tab_titles(theme: &Theme, selected: usize, tabs: &[TabItem<'_>]) -> Vec<Line<'static>> {
	let active = theme.header_style();
	let inactive = theme.tab_inactive_style();
	tabs.iter()
		.enumerate()
		.map(|(index, tab)| {
			let style = if index == selected { active } else { inactive };
			Line::from(tab.title()).style(style)
		})
		.collect()
}

fn calculate_tabs_width(tabs: &[TabItem<'_>]) -> u16 {
	tabs.iter()
		.fold(0u16, |width, tab| width.saturating_add(tab.width()))
}

fn render_status(frame: &mut Frame, area: Rect, status: StatusState<'_>, theme: &Theme) {
	let StatusState {
		status_text,
		busy,
		throbber_state,
	} = status;
	if area.width == 0 || area.height == 0 || status_text.is_empty() {
		return;
	}

	let muted_style = theme.empty_style();
	let mut line = Line::default();
	if busy {
		let spinner = Throbber::default()
			.style(muted_style)
			.throbber_style(muted_style);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans.push(Span::styled(status_text.to_string(), muted_style));

	let line_width = line.width() as u16;
	let start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};
	let max_width = area.right().saturating_sub(start_x);
	frame
		.buffer_mut()
		.set_line(start_x, area.top(), &line, max_width);
}
