//! Bulk data input: the per-track CSV table and raw graph-record JSON.
//!
//! Both paths end in the same canonical [`SankeyData`]; the CSV path builds
//! links by counting hit tracks per (platform, genre) pair, the JSON path
//! runs untrusted records through the normalizer.

use std::collections::{BTreeSet, HashMap};

use log::info;
use serde::Deserialize;
use thiserror::Error;

use super::normalize::{self, RawLink, RawNode};
use super::types::{NodeKind, SankeyData, SankeyLink, SankeyNode};

/// Platform display names and the track-table columns flagging their hits.
pub const PLATFORMS: [(&str, &str); 9] = [
	("Spotify", "Spotify_Hit"),
	("YouTube", "YouTube_Hit"),
	("TikTok", "TikTok_Hit"),
	("Apple Music", "Apple_Music_Hit"),
	("SiriusXM", "SiriusXM_Hit"),
	("Deezer", "Deezer_Hit"),
	("Amazon", "Amazon_Hit"),
	("Pandora", "Pandora_Hit"),
	("Shazam", "Shazam_Hit"),
];

const UNKNOWN_GENRE: &str = "Unknown";

/// Why a bulk load produced no usable graph.
#[derive(Debug, Error)]
pub enum IngestError {
	#[error("failed to parse track table: {0}")]
	Csv(#[from] csv::Error),
	#[error("failed to parse graph records: {0}")]
	Json(#[from] serde_json::Error),
	#[error("dataset contains no hit tracks")]
	Empty,
}

#[derive(Debug, Deserialize)]
struct RawGraph {
	#[serde(default)]
	nodes: Vec<RawNode>,
	#[serde(default)]
	links: Vec<RawLink>,
}

/// Parse `{nodes, links}` records and normalize them into a graph.
pub fn graph_from_json(text: &str) -> Result<SankeyData, IngestError> {
	let raw: RawGraph = serde_json::from_str(text)?;
	let data = normalize::normalize(raw.nodes, raw.links);
	if data.is_empty() {
		return Err(IngestError::Empty);
	}
	Ok(data)
}

/// Build the platform → genre graph from a one-row-per-track CSV table.
///
/// A `<Platform>_Hit` cell counts only when it holds exactly `True`. Tracks
/// that are a hit nowhere are excluded from the dataset entirely; a missing
/// genre label lands under "Unknown". Link value = number of hit tracks for
/// the (platform, genre) pair.
pub fn graph_from_track_csv(text: &str) -> Result<SankeyData, IngestError> {
	let mut reader = csv::Reader::from_reader(text.as_bytes());

	let mut counts: HashMap<(usize, String), f64> = HashMap::new();
	let mut genres: BTreeSet<String> = BTreeSet::new();
	let mut hit_tracks = 0usize;

	for row in reader.deserialize::<HashMap<String, String>>() {
		let row = row?;
		let hits: Vec<usize> = PLATFORMS
			.iter()
			.enumerate()
			.filter(|(_, (_, column))| row.get(*column).map(String::as_str) == Some("True"))
			.map(|(i, _)| i)
			.collect();
		if hits.is_empty() {
			continue;
		}
		hit_tracks += 1;

		let genre = match row.get("track_genre") {
			Some(g) if !g.is_empty() => g.clone(),
			_ => UNKNOWN_GENRE.to_string(),
		};
		genres.insert(genre.clone());
		for platform in hits {
			*counts.entry((platform, genre.clone())).or_insert(0.0) += 1.0;
		}
	}

	if counts.is_empty() {
		return Err(IngestError::Empty);
	}
	info!("Loaded {hit_tracks} hit tracks across {} genres", genres.len());

	let mut nodes: Vec<SankeyNode> = PLATFORMS
		.iter()
		.map(|(name, _)| SankeyNode {
			name: name.to_string(),
			kind: NodeKind::Platform,
		})
		.collect();
	nodes.extend(genres.iter().map(|name| SankeyNode {
		name: name.clone(),
		kind: NodeKind::Genre,
	}));

	let mut links = Vec::with_capacity(counts.len());
	for (platform, (name, _)) in PLATFORMS.iter().enumerate() {
		for genre in &genres {
			if let Some(&value) = counts.get(&(platform, genre.clone())) {
				links.push(SankeyLink {
					source: name.to_string(),
					target: genre.clone(),
					value,
				});
			}
		}
	}

	Ok(SankeyData { nodes, links })
}

#[cfg(test)]
mod tests {
	use super::*;

	const HEADER: &str = "track_name,artists,track_genre,popularity,Spotify_Hit,YouTube_Hit,TikTok_Hit,Apple_Music_Hit,SiriusXM_Hit,Deezer_Hit,Amazon_Hit,Pandora_Hit,Shazam_Hit";

	fn csv_of(rows: &[&str]) -> String {
		let mut text = HEADER.to_string();
		for row in rows {
			text.push('\n');
			text.push_str(row);
		}
		text
	}

	#[test]
	fn test_track_csv_counts_hits_per_pair() {
		let text = csv_of(&[
			"Song A,Artist,pop,80,True,True,False,False,False,False,False,False,False",
			"Song B,Artist,pop,75,True,False,False,False,False,False,False,False,False",
			"Song C,Artist,rock,60,False,True,False,False,False,False,False,False,False",
		]);
		let data = graph_from_track_csv(&text).unwrap();

		let spotify_pop = data
			.links
			.iter()
			.find(|l| l.source == "Spotify" && l.target == "pop")
			.unwrap();
		assert_eq!(spotify_pop.value, 2.0);
		let youtube_rock = data
			.links
			.iter()
			.find(|l| l.source == "YouTube" && l.target == "rock")
			.unwrap();
		assert_eq!(youtube_rock.value, 1.0);
	}

	#[test]
	fn test_track_csv_excludes_rows_without_hits() {
		let text = csv_of(&[
			"Miss,Artist,jazz,50,False,False,False,False,False,False,False,False,False",
			"Hit,Artist,pop,90,True,False,False,False,False,False,False,False,False",
		]);
		let data = graph_from_track_csv(&text).unwrap();
		assert!(data.genre_names().all(|g| g != "jazz"));
		assert_eq!(data.links.len(), 1);
	}

	#[test]
	fn test_track_csv_only_literal_true_counts() {
		let text = csv_of(&[
			"Song,Artist,pop,80,true,TRUE,1,yes,False,False,False,False,False",
			"Song2,Artist,pop,80,True,False,False,False,False,False,False,False,False",
		]);
		let data = graph_from_track_csv(&text).unwrap();
		// Row one has no exact "True" cell, so only row two survives.
		assert_eq!(data.links.len(), 1);
		assert_eq!(data.links[0].value, 1.0);
	}

	#[test]
	fn test_track_csv_missing_genre_lands_in_unknown() {
		let text = csv_of(&[
			"Song,Artist,,80,True,False,False,False,False,False,False,False,False",
		]);
		let data = graph_from_track_csv(&text).unwrap();
		assert!(data.genre_names().any(|g| g == "Unknown"));
	}

	#[test]
	fn test_track_csv_keeps_all_nine_platform_nodes() {
		let text = csv_of(&[
			"Song,Artist,pop,80,True,False,False,False,False,False,False,False,False",
		]);
		let data = graph_from_track_csv(&text).unwrap();
		let platforms = data
			.nodes
			.iter()
			.filter(|n| n.kind == NodeKind::Platform)
			.count();
		assert_eq!(platforms, PLATFORMS.len());
	}

	#[test]
	fn test_track_csv_without_hits_is_an_error() {
		let text = csv_of(&[
			"Miss,Artist,jazz,50,False,False,False,False,False,False,False,False,False",
		]);
		assert!(matches!(
			graph_from_track_csv(&text),
			Err(IngestError::Empty)
		));
	}

	#[test]
	fn test_json_records_run_through_the_normalizer() {
		let text = r#"{
			"nodes": [
				{"name": "Spotify", "type": "platform"},
				{"name": "Pop", "type": "genre"},
				{"name": "", "type": "genre"}
			],
			"links": [
				{"source": "Spotify", "target": "Pop"},
				{"source": "Spotify", "target": "Pop", "value": "4"},
				{"source": "Spotify", "target": "Gone", "value": 2}
			]
		}"#;
		let data = graph_from_json(text).unwrap();
		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.links.len(), 2);
		assert_eq!(data.links[0].value, 1.0);
		assert_eq!(data.links[1].value, 4.0);
	}

	#[test]
	fn test_json_empty_graph_is_an_error() {
		assert!(matches!(
			graph_from_json(r#"{"nodes": [], "links": []}"#),
			Err(IngestError::Empty)
		));
		assert!(matches!(graph_from_json("not json"), Err(IngestError::Json(_))));
	}
}
