use crate::global_settings::GlobalSettings;
use crate::walkthrough::Walkthrough;
use interval_collections::{Interval, IntervalMap};
use itertools::Itertools;

/// Run the operations on a map from integer intervals to names
pub fn range_map_walkthrough() -> interval_collections::Result<Walkthrough> {
    let mut w = Walkthrough::new("IntervalMap");
    let mut map = IntervalMap::new();

    map.put(Interval::new_closed_closed(1, 10), "foo")?;
    w.record("put [1, 10] => foo", &map);

    map.put(Interval::new_open_open(3, 6), "bar")?;
    w.record("put (3, 6) => bar", &map);

    map.put(Interval::new_open_open(10, 20), "foo")?;
    w.record("put (10, 20) => foo", &map);

    map.remove(&Interval::new_closed_closed(5, 11))?;
    w.record("remove [5, 11]", &map);

    w.record(
        "as_map_of_ranges",
        map.as_map_of_ranges()
            .iter()
            .format_with(", ", |(r, v), cb| cb(&format_args!("{r} => {v}"))),
    );
    w.record(
        "sub_range_map (12, 18)",
        map.sub_range_map(&Interval::new_open_open(12, 18))?,
    );
    w.record("get 4", map.get(&4).copied().unwrap_or("none"));
    w.record("get 11", map.get(&11).copied().unwrap_or("none"));

    map.put_coalescing(Interval::new_closed_closed(20, 25), "foo")?;
    w.record("put_coalescing [20, 25] => foo", &map);

    w.record("span", map.span()?);
    Ok(w)
}

pub fn range_map_view(globals: &GlobalSettings) -> anyhow::Result<String> {
    let w = range_map_walkthrough()?;
    Ok(w.render(&globals.table, globals.width))
}

#[cfg(test)]
mod test {
    use crate::range_map_view::range_map_walkthrough;

    #[test]
    fn test_range_map_walkthrough() {
        let w = range_map_walkthrough().unwrap();
        assert_eq!(
            w.results().collect::<Vec<_>>(),
            vec![
                "{[1, 10] => foo}",
                "{[1, 3] => foo, (3, 6) => bar, [6, 10] => foo}",
                "{[1, 3] => foo, (3, 6) => bar, [6, 10] => foo, \
                 (10, 20) => foo}",
                "{[1, 3] => foo, (3, 5) => bar, (11, 20) => foo}",
                "[1, 3] => foo, (3, 5) => bar, (11, 20) => foo",
                "{(12, 18) => foo}",
                "bar",
                "none",
                "{[1, 3] => foo, (3, 5) => bar, (11, 25] => foo}",
                "[1, 25]",
            ]
        );
    }
}
