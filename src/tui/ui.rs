use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::filter::Selection;
use crate::core::listing::Vocabulary;
use crate::core::state::{App, Screen};
use crate::tui::component::Component;
use crate::tui::components::{BookDetail, BookList, FilterBar, HelpBar, SearchBar, TitleBar};
use crate::tui::{Focus, TuiState};

pub const CATEGORY_LABEL: &str = "Category";
pub const TYPE_LABEL: &str = "Type";
pub const CONDITION_LABEL: &str = "Condition";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(&app.source_name, app.books.len(), &app.status_message).render(frame, title_area);

    match &app.screen {
        Screen::Browse => draw_browse(frame, main_area, app, tui),
        Screen::Detail(book) => BookDetail::new(book, &app.currency_symbol).render(frame, main_area),
    }

    draw_help(frame, help_area, &app.screen, tui.focus);
}

fn draw_browse(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(3), Length(1), Length(1), Length(1), Min(0)]);
    let [search_area, category_area, type_area, condition_area, list_area] = layout.areas(area);

    SearchBar::new(&app.filter.search_query)
        .placeholder(&app.search_placeholder)
        .focused(tui.focus == Focus::Search)
        .render(frame, search_area);

    let label_width = [CATEGORY_LABEL, TYPE_LABEL, CONDITION_LABEL]
        .iter()
        .map(|l| l.len())
        .max()
        .unwrap_or(0);
    selector_bar(CATEGORY_LABEL, app.filter.category, tui.focus == Focus::Category)
        .label_width(label_width)
        .render(frame, category_area);
    selector_bar(TYPE_LABEL, app.filter.listing_type, tui.focus == Focus::ListingType)
        .label_width(label_width)
        .render(frame, type_area);
    selector_bar(CONDITION_LABEL, app.filter.condition, tui.focus == Focus::Condition)
        .label_width(label_width)
        .render(frame, condition_area);

    // Recomputed every frame
    let visible = app.visible();
    BookList::new(
        &mut tui.book_list,
        &visible,
        &app.currency_symbol,
        tui.focus == Focus::List,
    )
    .render(frame, list_area);
}

/// A `FilterBar` over every option of a vocabulary, with `current` selected.
pub fn selector_bar<T: Vocabulary>(label: &str, current: Selection<T>, focused: bool) -> FilterBar<'_> {
    let options = Selection::<T>::options().iter().map(|o| o.label()).collect();
    FilterBar::new(label, options, current.index(), focused)
}

fn draw_help(frame: &mut Frame, area: Rect, screen: &Screen, focus: Focus) {
    let keys: &[(&str, &str)] = match (screen, focus) {
        (Screen::Detail(_), _) => &[("Esc", "Back"), ("Ctrl+C", "Quit")],
        (Screen::Browse, Focus::Category | Focus::ListingType | Focus::Condition) => &[
            ("←/→", "Change"),
            ("Tab", "Next"),
            ("↑/↓", "Move"),
            ("Enter", "Open"),
            ("Esc", "Clear/Quit"),
        ],
        (Screen::Browse, _) => &[
            ("Type", "Search"),
            ("Tab", "Filters"),
            ("↑/↓", "Move"),
            ("Enter", "Open"),
            ("Esc", "Clear/Quit"),
        ],
    };
    HelpBar::new(keys).render(frame, area);
}
