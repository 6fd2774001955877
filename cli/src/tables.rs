/// How a column reacts when the table does not fit in the terminal
#[derive(Clone, Copy)]
pub enum Width {
    /// Always as wide as its widest cell
    Fit,

    /// Gives up space when needed, down to the given number of characters
    Shrink(usize),
}

#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Which end of a cell survives when it is too long
#[derive(Clone, Copy)]
pub enum Truncate {
    KeepStart,
    KeepEnd,
}

pub struct Column<'a, TRow> {
    header: String,
    align: Align,
    truncate: Truncate,
    width: Width,
    cell: &'a dyn Fn(&TRow) -> String,
}

impl<'a, TRow> Column<'a, TRow> {
    pub fn new(header: &str, cell: &'a dyn Fn(&TRow) -> String) -> Self {
        Column {
            header: header.to_string(),
            align: Align::Left,
            truncate: Truncate::KeepStart,
            width: Width::Fit,
            cell,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn truncate(mut self, truncate: Truncate) -> Self {
        self.truncate = truncate;
        self
    }

    pub fn width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }
}

#[derive(Clone)]
pub struct Settings {
    pub colsep: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            colsep: "│".to_string(),
        }
    }
}

pub struct Table<'a, TRow> {
    settings: Settings,
    title: Option<String>,
    show_headers: bool,
    columns: Vec<Column<'a, TRow>>,
    cells: Vec<Vec<String>>,
}

impl<'a, TRow> Table<'a, TRow> {
    pub fn new(settings: &Settings, columns: Vec<Column<'a, TRow>>) -> Self {
        Table {
            settings: settings.clone(),
            title: None,
            show_headers: false,
            columns,
            cells: Vec::new(),
        }
    }

    /// Centered above the table, followed by a separator line
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_headers(mut self) -> Self {
        self.show_headers = true;
        self
    }

    pub fn add_rows(&mut self, rows: &[TRow]) {
        for row in rows {
            self.cells
                .push(self.columns.iter().map(|c| (c.cell)(row)).collect());
        }
    }

    /// Width of each column.  Shrinkable columns share whatever space is
    /// left once every column got its minimal width.  If even that does not
    /// fit, lines will simply wrap in the terminal.
    fn widths(&self, max_width: usize) -> Vec<usize> {
        let sep_width = self.columns.len().saturating_sub(1)
            * self.settings.colsep.chars().count();
        let available = max_width.saturating_sub(sep_width);

        let mut ideal = Vec::with_capacity(self.columns.len());
        let mut minimal = Vec::with_capacity(self.columns.len());
        for (idx, col) in self.columns.iter().enumerate() {
            let header = if self.show_headers {
                col.header.chars().count()
            } else {
                0
            };
            let widest = self
                .cells
                .iter()
                .filter_map(|row| row.get(idx))
                .map(|c| c.chars().count())
                .fold(header, std::cmp::max);
            ideal.push(widest);
            minimal.push(match col.width {
                Width::Fit => widest,
                Width::Shrink(min) => std::cmp::min(min, widest),
            });
        }

        let shrinkable = self
            .columns
            .iter()
            .filter(|c| matches!(c.width, Width::Shrink(_)))
            .count();
        if ideal.iter().sum::<usize>() <= available || shrinkable == 0 {
            return ideal;
        }

        let extra =
            available.saturating_sub(minimal.iter().sum::<usize>()) / shrinkable;
        self.columns
            .iter()
            .zip(ideal.iter().zip(&minimal))
            .map(|(col, (ideal, min))| match col.width {
                Width::Fit => *ideal,
                Width::Shrink(_) => std::cmp::min(*ideal, min + extra),
            })
            .collect()
    }

    fn push_line<'b>(
        &self,
        into: &mut String,
        widths: &[usize],
        cells: impl Iterator<Item = (&'b str, Align, Truncate)>,
    ) {
        for (idx, ((text, align, truncate), width)) in
            cells.zip(widths).enumerate()
        {
            if idx > 0 {
                into.push_str(&self.settings.colsep);
            }
            let width = *width;
            let text = fit(text, width, truncate);
            into.push_str(&match align {
                Align::Left => format!("{text:<width$}"),
                Align::Center => format!("{text:^width$}"),
                Align::Right => format!("{text:>width$}"),
            });
        }
        into.push('\n');
    }

    pub fn to_string(&self, max_width: usize) -> String {
        let widths = self.widths(max_width);
        let mut result = String::new();

        if let Some(title) = &self.title {
            let total = widths.iter().sum::<usize>()
                + widths.len().saturating_sub(1)
                    * self.settings.colsep.chars().count();
            result.push_str(&format!("{title:^total$}\n{:─<total$}\n", ""));
        }

        if self.show_headers {
            self.push_line(
                &mut result,
                &widths,
                self.columns
                    .iter()
                    .map(|c| (c.header.as_str(), Align::Center, c.truncate)),
            );
            let rules: Vec<String> =
                widths.iter().map(|w| "─".repeat(*w)).collect();
            self.push_line(
                &mut result,
                &widths,
                rules
                    .iter()
                    .map(|r| (r.as_str(), Align::Left, Truncate::KeepStart)),
            );
        }

        for row in &self.cells {
            self.push_line(
                &mut result,
                &widths,
                row.iter()
                    .zip(&self.columns)
                    .map(|(c, col)| (c.as_str(), col.align, col.truncate)),
            );
        }
        result
    }
}

/// At most width characters of value
fn fit(value: &str, width: usize, truncate: Truncate) -> String {
    let len = value.chars().count();
    if len <= width {
        return value.to_string();
    }
    match truncate {
        Truncate::KeepStart => value.chars().take(width).collect(),
        Truncate::KeepEnd => value.chars().skip(len - width).collect(),
    }
}
