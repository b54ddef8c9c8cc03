use anyhow::Result;
use marquee::{Movie, SearchOutcome};
use serde_json::json;

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	println!("{}", format_outcome_plain(outcome));
}

pub(crate) fn format_outcome_plain(outcome: &SearchOutcome) -> String {
	if !outcome.accepted {
		return format!("Search cancelled (query: '{}')", outcome.query);
	}

	match &outcome.selection {
		Some(movie) => describe_movie(movie),
		None => "No selection".to_string(),
	}
}

fn describe_movie(movie: &Movie) -> String {
	match movie.year() {
		Some(year) => format!("{} ({year})", movie.title),
		None => movie.title.clone(),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(movie) => json!({
			"id": movie.id,
			"title": movie.title,
			"year": movie.year(),
			"release_date": movie.release_date,
			"poster_path": movie.poster_path,
			"vote_average": movie.vote_average,
			"original_language": movie.original_language,
		}),
		None => serde_json::Value::Null,
	};

	let trending: Vec<serde_json::Value> = outcome
		.trending
		.iter()
		.enumerate()
		.map(|(index, record)| {
			json!({
				"rank": index + 1,
				"search_term": record.search_term,
				"title": record.title,
				"count": record.count,
				"movie_id": record.movie_id,
				"poster_url": record.poster_url,
			})
		})
		.collect();

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
		"trending": trending,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
