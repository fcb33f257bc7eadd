//! Scrape the summary fields out of a rider's profile page.
//!
//! Each field is located on its own: every row whose `<th>` contains the
//! field's label, then that row's `<td>`. A missing or reshaped row only loses
//! that field.

pub(crate) mod extract;

use scraper::{ElementRef, Html, Selector};

use super::{ProfileSummary, Standing};
use extract::{cell_text, parse_count};
pub use extract::{parse_race_ranking, parse_zpoints};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Scrapes a profile page body into a [`ProfileSummary`].
///
/// Returns the all-`None` summary when the page has no profile information
/// table (unknown rider, or a page shape this parser does not recognise).
pub fn scrape_profile(html: &str) -> ProfileSummary {
    let doc = Html::parse_document(html);
    let Some(table) = profile_table(&doc) else {
        return ProfileSummary::default();
    };

    let ranking = race_ranking(table);
    let zp = zpoints(table);
    ProfileSummary {
        profile_name: profile_name(&doc),
        race_ranking_pts: ranking.points,
        race_ranking_place: ranking.place,
        zwift_racing_score: zwift_racing_score(table),
        z_points: zp.points,
        z_points_place: zp.place,
        country: country(table),
    }
}

/// The `table#profile_information` element, if present.
pub fn profile_table(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&selector("table#profile_information")).next()
}

/// Display name from the results tab link.
pub fn profile_name(doc: &Html) -> Option<String> {
    doc.select(&selector(r##"a[href="#tab-results"][data-toggle="tab"]"##))
        .next()
        .map(cell_text)
}

/// The "Race Ranking" rows: decimal points and overall place.
pub fn race_ranking(table: ElementRef<'_>) -> Standing<f64> {
    labelled_cells(table, "Race Ranking")
        .map(|td| parse_race_ranking(&cell_text(td)))
        .fold(Standing::default(), latest)
}

/// The "Zwift Racing Score" rows: the bold number in the cell.
pub fn zwift_racing_score(table: ElementRef<'_>) -> Option<u32> {
    let bold = selector("b");
    labelled_cells(table, "Zwift Racing Score")
        .filter_map(|td| td.select(&bold).next())
        .filter_map(|b| parse_count(&cell_text(b)))
        .last()
}

/// The "ZPoints" rows: integer points and place.
pub fn zpoints(table: ElementRef<'_>) -> Standing<u32> {
    labelled_cells(table, "ZPoints")
        .map(|td| parse_zpoints(&cell_text(td)))
        .fold(Standing::default(), latest)
}

pub fn country(table: ElementRef<'_>) -> Option<String> {
    labelled_cells(table, "Country").map(cell_text).last()
}

/// First `<td>` of every row whose `<th>` text contains `label`, in document
/// order. When several rows match, the last parsable value wins.
fn labelled_cells<'a>(
    table: ElementRef<'a>,
    label: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    let (tr, th, td) = (selector("tr"), selector("th"), selector("td"));
    table.select(&tr).collect::<Vec<_>>().into_iter().filter_map(move |row| {
        let header = row.select(&th).next()?;
        if !header.text().collect::<String>().contains(label) {
            return None;
        }
        row.select(&td).next()
    })
}

/// Keeps each part of `acc` unless `next` parsed a value for it.
fn latest<P>(acc: Standing<P>, next: Standing<P>) -> Standing<P> {
    Standing {
        points: next.points.or(acc.points),
        place: next.place.or(acc.place),
    }
}
