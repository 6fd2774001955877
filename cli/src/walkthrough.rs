use crate::tables::{Align, Column, Table, Truncate, Width};

/// One operation of a walkthrough, and what the container looks like (or
/// what the query returned) afterwards.
pub struct Step {
    index: usize,
    operation: String,
    result: String,
}

pub struct Walkthrough {
    title: String,
    steps: Vec<Step>,
}

impl Walkthrough {
    pub fn new(title: &str) -> Self {
        Walkthrough {
            title: title.to_string(),
            steps: Vec::new(),
        }
    }

    /// Record an operation and its outcome
    pub fn record(&mut self, operation: &str, result: impl std::fmt::Display) {
        let result = result.to_string();
        log::info!("{}: {} -> {}", self.title, operation, result);
        self.steps.push(Step {
            index: self.steps.len() + 1,
            operation: operation.to_string(),
            result,
        });
    }

    #[cfg(test)]
    pub fn results(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.result.as_str())
    }

    pub fn render(
        &self,
        settings: &crate::tables::Settings,
        max_width: usize,
    ) -> String {
        let index = |s: &Step| s.index.to_string();
        let operation = |s: &Step| s.operation.clone();
        let result = |s: &Step| s.result.clone();
        let columns = vec![
            Column::new("#", &index).align(Align::Right),
            Column::new("Operation", &operation).truncate(Truncate::KeepEnd),
            Column::new("Result", &result).width(Width::Shrink(6)),
        ];
        let mut table = Table::new(settings, columns)
            .with_title(&self.title)
            .with_headers();
        table.add_rows(&self.steps);
        table.to_string(max_width)
    }
}
