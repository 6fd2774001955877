use crate::global_settings::GlobalSettings;
use crate::walkthrough::Walkthrough;
use interval_collections::{Interval, IntervalSet};
use itertools::Itertools;

/// Run the operations on a set of integer intervals
pub fn range_set_walkthrough() -> interval_collections::Result<Walkthrough> {
    let mut w = Walkthrough::new("IntervalSet");
    let mut set = IntervalSet::new();

    set.add(Interval::new_closed_closed(1, 10))?;
    w.record("add [1, 10]", &set);

    set.add(Interval::new_closed_open(11, 15))?;
    w.record("add [11, 15)", &set);

    set.add(Interval::new_closed_open(15, 20))?;
    w.record("add [15, 20)", &set);

    set.add(Interval::new_open_closed(0, 0))?;
    w.record("add (0, 0]", &set);

    set.remove(&Interval::new_open_open(5, 10))?;
    w.record("remove (5, 10)", &set);

    w.record("complement", set.complement()?);
    w.record(
        "sub_range_set [5, 8]",
        set.sub_range_set(&Interval::new_closed_closed(5, 8))?,
    );
    w.record("as_ranges", set.as_ranges().iter().format(", "));
    w.record("contains 3", set.contains(&3));
    w.record("contains 8", set.contains(&8));
    w.record(
        "range_containing 12",
        set.range_containing(&12)
            .map_or_else(|| "none".to_string(), |r| r.to_string()),
    );
    w.record(
        "range_containing 8",
        set.range_containing(&8)
            .map_or_else(|| "none".to_string(), |r| r.to_string()),
    );
    w.record(
        "encloses [2, 3]",
        set.encloses(&Interval::new_closed_closed(2, 3))?,
    );
    w.record(
        "encloses [4, 11]",
        set.encloses(&Interval::new_closed_closed(4, 11))?,
    );
    w.record("span", set.span()?);

    let empty = IntervalSet::<i32>::new();
    w.record(
        "span of {}",
        empty
            .span()
            .map_or_else(|e| format!("error: {e}"), |r| r.to_string()),
    );
    Ok(w)
}

pub fn range_set_view(globals: &GlobalSettings) -> anyhow::Result<String> {
    let w = range_set_walkthrough()?;
    Ok(w.render(&globals.table, globals.width))
}
