use anyhow::Result;
use crossterm::event::KeyCode;
use flowgrid::{
    ChangeKind, ChangeSet, ColorList, Config, GridLayout, HeightPattern, HeightPolicy, Swatch,
};
use tracing::{debug, info};

use super::{AppEvent, AppView, HIGHLIGHT_TICKS, Highlight};
use crate::palette;

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub view: AppView,
    pub colors: ColorList<Swatch>,
    pub layout: GridLayout,
    pub pattern: HeightPattern,
    policy: Box<dyn HeightPolicy>,
    pub batch_size: usize,
    pub selected_index: usize,
    pub status: Option<String>,
    pub highlight: Option<Highlight>,
}

impl App {
    pub fn new(config: &Config, initial: Vec<Swatch>) -> Result<Self> {
        let layout = config.grid_layout()?;
        let pattern = config.ui.height_pattern;
        info!(
            columns = layout.params().cell_count(),
            seeded = initial.len(),
            "starting grid"
        );
        Ok(Self {
            running: true,
            view: AppView::Grid,
            colors: ColorList::from(initial),
            layout,
            pattern,
            policy: pattern.policy(),
            batch_size: config.ui.batch_size,
            selected_index: 0,
            status: None,
            highlight: None,
        })
    }

    pub fn policy(&self) -> &dyn HeightPolicy {
        self.policy.as_ref()
    }

    pub fn columns(&self) -> usize {
        self.layout.params().cell_count()
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.fade_highlight(),
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.view == AppView::Help {
            match key {
                KeyCode::Char('q') => self.running = false,
                KeyCode::Char('?') | KeyCode::Esc => self.view = AppView::Grid,
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') => self.view = AppView::Help,
            KeyCode::Char('a') => {
                let batch = palette::random_swatches(self.batch_size);
                self.add_colors(batch);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.remove_selected_matching(),
            KeyCode::Char('x') | KeyCode::Delete => self.remove_selected(),
            KeyCode::Char('p') => self.toggle_pattern(),
            KeyCode::Esc => self.status = None,
            KeyCode::Left => self.move_selection_left(),
            KeyCode::Right => self.move_selection_right(),
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            KeyCode::Home => self.selected_index = 0,
            KeyCode::End => self.selected_index = self.colors.len().saturating_sub(1),
            _ => {}
        }
    }

    /// Appends a batch and highlights the inserted cells.
    pub fn add_colors(&mut self, values: Vec<Swatch>) {
        let change = self.colors.append_all(values);
        if change.is_empty() {
            return;
        }
        self.status = Some(format!(
            "Added {} ({} total)",
            describe_swatches(&self.colors, &change),
            self.colors.len()
        ));
        self.highlight = Some(Highlight {
            change,
            ticks_left: HIGHLIGHT_TICKS,
        });
    }

    /// Removes every cell with the same swatch as the selected one.
    pub fn remove_selected_matching(&mut self) {
        let Ok(&swatch) = self.colors.get(self.selected_index) else {
            self.status = Some("Nothing to remove.".to_string());
            return;
        };
        let change = self.colors.remove_all_matching(&swatch);
        self.status = Some(format!(
            "Removed {} {swatch} ({} left)",
            change.len(),
            self.colors.len()
        ));
        self.after_removal(&change);
    }

    /// Removes only the selected cell.
    pub fn remove_selected(&mut self) {
        match self.colors.remove_at(self.selected_index) {
            Ok(change) => {
                self.status = Some(format!("Removed 1 ({} left)", self.colors.len()));
                self.after_removal(&change);
            }
            Err(err) => {
                debug!(%err, "remove ignored");
                self.status = Some("Nothing to remove.".to_string());
            }
        }
    }

    fn after_removal(&mut self, change: &ChangeSet) {
        // Insertion positions are stale once anything is removed.
        self.highlight = None;
        let removed_before = change
            .positions()
            .iter()
            .filter(|&&position| position < self.selected_index)
            .count();
        self.selected_index = self.selected_index.saturating_sub(removed_before);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.colors.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.colors.len() {
            self.selected_index = self.colors.len() - 1;
        }
    }

    fn toggle_pattern(&mut self) {
        self.pattern = match self.pattern {
            HeightPattern::Fixed => HeightPattern::Alternating,
            HeightPattern::Alternating => HeightPattern::Fixed,
        };
        self.policy = self.pattern.policy();
        self.status = Some(format!("Height pattern: {}", self.pattern));
    }

    fn fade_highlight(&mut self) {
        if let Some(highlight) = &mut self.highlight {
            highlight.ticks_left = highlight.ticks_left.saturating_sub(1);
            if highlight.ticks_left == 0 {
                self.highlight = None;
            }
        }
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlight
            .as_ref()
            .is_some_and(|h| h.change.kind() == ChangeKind::Inserted && h.change.contains(index))
    }

    fn move_selection_left(&mut self) {
        if self.colors.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.colors.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    fn move_selection_right(&mut self) {
        if self.colors.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.colors.len();
    }

    fn move_selection_up(&mut self) {
        let columns = self.columns();
        if self.selected_index >= columns {
            self.selected_index -= columns;
        }
    }

    fn move_selection_down(&mut self) {
        let columns = self.columns();
        if self.selected_index + columns < self.colors.len() {
            self.selected_index += columns;
        }
    }
}

fn describe_swatches(colors: &ColorList<Swatch>, change: &ChangeSet) -> String {
    change
        .positions()
        .iter()
        .filter_map(|&position| colors.get(position).ok())
        .map(|swatch| swatch.name())
        .collect::<Vec<_>>()
        .join(", ")
}
