// tests/export_view.rs
//
// Export boundary: filtered rows → CSV/TSV text, header toggle, padding.
//
use dpl_filter::csv::to_export_string;
use dpl_filter::filter::{self, FilterState};
use dpl_filter::normalize::normalize;
use dpl_filter::roster::parse_doc;

const DOC: &str = r#"
    <table>
      <tr class="dienstid1">
        <td>Mo</td><td>01.01.</td>
        <td class="dpl_pos">M&uuml;ller</td>
        <td class="dpl_pos">Weber</td>
      </tr>
      <tr class="dienstid2">
        <td></td><td></td>
        <td class="dpl_pos">Huber</td>
      </tr>
    </table>
"#;

#[test]
fn visible_rows_export_with_headers_tsv() {
    let mut roster = parse_doc(DOC);
    normalize(&mut roster.rows);

    let mut f = FilterState::default();
    f.names = "huber".to_string();
    filter::apply(&mut roster.rows, &f);

    let headers = Some(roster.headers_for_display());
    let width = headers.as_ref().unwrap().len();
    let cells = roster.cells(true, width);

    let txt = to_export_string(&headers, &cells, true, '\t');
    let lines: Vec<&str> = txt.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Tag\tDatum\tLenker\tTeamleiter\tDritter\tVierter");
    // Inherited date exported, short row padded to header width.
    assert_eq!(lines[1], "Mo\t01.01.\tHuber\t\t\t");
}

#[test]
fn full_roster_export_keeps_hidden_rows() {
    let mut roster = parse_doc(DOC);
    normalize(&mut roster.rows);

    let mut f = FilterState::default();
    f.names = "huber".to_string();
    filter::apply(&mut roster.rows, &f);

    let cells = roster.cells(false, 6);
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0][2], "Müller");
}

#[test]
fn csv_quotes_cells_containing_the_separator() {
    let mut roster = parse_doc(DOC);
    normalize(&mut roster.rows);
    roster.rows[0].names[0] = "Müller, HA".to_string();

    let cells = roster.cells(false, 6);
    let txt = to_export_string(&None, &cells, false, ',');
    assert!(txt.starts_with("Mo,01.01.,\"Müller, HA\",Weber,,"));
}
