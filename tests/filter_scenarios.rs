// tests/filter_scenarios.rs
//
// End-to-end over a synthetic roster page: parse → normalize → filter.
//
use dpl_filter::filter::{self, FilterState};
use dpl_filter::normalize::normalize;
use dpl_filter::roster::parse_doc;

const DOC: &str = r#"
    <html><body>
    <table id="dpl">
      <tr><th>Tag</th><th>Datum</th><th>Zeit</th><th>Pos</th></tr>
      <tr class="dienstid101">
        <td>Mo</td><td>01.01.</td>
        <td>06:00</td>
        <td class="dpl_pos">M&uuml;ller</td>
        <td class="dpl_pos">Weber</td>
      </tr>
      <tr class="dienstid102">
        <td></td><td></td>
        <td>12:00</td>
        <td class="dpl_pos">Huber</td>
        <td class="dpl_pos">Klein</td>
      </tr>
      <tr class="dienstid103">
        <td>Di</td><td>02.01.</td>
        <td>06:00</td>
        <td class="dpl_pos">HA Mustermann</td>
      </tr>
      <tr class="dienstid104">
        <td></td><td></td>
        <td>12:00</td>
        <td class="dpl_pos">Musterfrau</td>
        <td class="dpl_pos">Weber</td>
      </tr>
      <tr class="dienstid105">
        <td></td><td></td>
        <td>18:00</td>
        <td class="dpl_pos">Klein</td>
      </tr>
    </table>
    </body></html>
"#;

fn visible(rows: &[dpl_filter::roster::Row]) -> Vec<usize> {
    filter::visible_indices(rows)
}

#[test]
fn normalize_fills_inherited_days_and_dates() {
    let mut roster = parse_doc(DOC);
    assert_eq!(roster.rows.len(), 5);
    normalize(&mut roster.rows);

    assert_eq!(roster.rows[1].day, "Mo");
    assert_eq!(roster.rows[1].date, "01.01.");
    assert!(roster.rows[1].derived);

    assert_eq!(roster.rows[3].date, "02.01.");
    assert_eq!(roster.rows[4].date, "02.01.");
    assert!(!roster.rows[2].derived);
}

#[test]
fn date_plus_name_narrow_to_one_row() {
    let mut roster = parse_doc(DOC);
    normalize(&mut roster.rows);

    // The inherited date makes row 102 findable by date at all.
    let mut f = FilterState::default();
    f.date = s("01.01");
    f.names = s("huber");
    filter::apply(&mut roster.rows, &f);

    assert_eq!(visible(&roster.rows), vec![1]);
}

#[test]
fn or_terms_within_a_field_and_and_across_fields() {
    let mut roster = parse_doc(DOC);
    normalize(&mut roster.rows);

    let mut f = FilterState::default();
    f.names = s("musterfrau, mustermann");
    filter::apply(&mut roster.rows, &f);
    assert_eq!(visible(&roster.rows), vec![2, 3]);

    // Adding an unrelated positional filter prunes further.
    f.slots[1] = s("weber");
    filter::apply(&mut roster.rows, &f);
    assert_eq!(visible(&roster.rows), vec![3]);

    // A non-matching slot filter on a row missing that cell hides it.
    f.slots[1] = s("niemand");
    filter::apply(&mut roster.rows, &f);
    assert!(visible(&roster.rows).is_empty());
}

#[test]
fn reset_restores_every_row() {
    let mut roster = parse_doc(DOC);
    normalize(&mut roster.rows);

    let mut f = FilterState::default();
    f.date = s("02.01");
    f.slots[0] = s("klein");
    filter::apply(&mut roster.rows, &f);
    assert_eq!(visible(&roster.rows), vec![4]);

    // Reset = clear all fields, then the same recompute path.
    f.clear();
    assert!(f.is_empty());
    filter::apply(&mut roster.rows, &f);
    assert_eq!(visible(&roster.rows), vec![0, 1, 2, 3, 4]);
}

#[test]
fn normalizing_twice_changes_nothing() {
    let mut once = parse_doc(DOC);
    normalize(&mut once.rows);
    let mut twice = once.clone();
    normalize(&mut twice.rows);
    assert_eq!(once.rows, twice.rows);
}

fn s(v: &str) -> String {
    v.to_string()
}
