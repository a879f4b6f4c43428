use anyhow::Result;
use portal_search::SearchOutcome;
use serde_json::json;

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	match outcome.url() {
		Some(url) => println!("{url}"),
		None => println!("Search cancelled (query: '{}')", outcome.query),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted(),
		"query": outcome.query,
		"url": outcome.url(),
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
