//! Sample catalog loaded into a freshly built music graph.
//!
//! The catalog is fixed; a constraint violation raised while loading it is a
//! bug in the tables below.

use tracing::debug;

use crate::error::Result;
use crate::model::graph::Graph;
use crate::model::vocab::music::{
    ALBUM, ARTIST, COMPILATION, EP, GENRE, LYRICS, MUSICAL_ENSEMBLE, SINGLE, SOLO_ARTIST, TRACK,
    VARIOUS_ARTISTS,
};

// ---------------------------------------------------------------------------
// Catalog tables
// ---------------------------------------------------------------------------

const ROCK: &str = "Rock";
const HARD_ROCK: &str = "Hard Rock";
const PROG_ROCK: &str = "Progressive Rock";
const PROG_METAL: &str = "Progressive Metal";
const INSTRUMENTAL_ROCK: &str = "Instrumental Rock";

const GENRES: &[&str] = &[ROCK, HARD_ROCK, PROG_ROCK, PROG_METAL, INSTRUMENTAL_ROCK];

const SOLO_ARTISTS: &[&str] = &[
    "Geddy Lee",
    "Alex Lifeson",
    "Neil Peart",
    "Pye Dubois",
    "James LaBrie",
    "John Petrucci",
    "John Myung",
    "Jordan Rudess",
    "Mike Portnoy",
    "Tony Levin",
    "Eddie Cochran",
    "Robert Johnson",
];

struct EnsembleSpec {
    name: &'static str,
    members: &'static [&'static str],
}

const ENSEMBLES: &[EnsembleSpec] = &[
    EnsembleSpec {
        name: "Rush",
        members: &["Geddy Lee", "Alex Lifeson", "Neil Peart"],
    },
    EnsembleSpec {
        name: "Dream Theater",
        members: &[
            "James LaBrie",
            "John Petrucci",
            "John Myung",
            "Jordan Rudess",
            "Mike Portnoy",
        ],
    },
    EnsembleSpec {
        name: "Liquid Tension Experiment",
        members: &["Mike Portnoy", "John Petrucci", "Tony Levin", "Jordan Rudess"],
    },
];

struct TrackSpec {
    title: &'static str,
    length_ms: i64,
    /// Lyric writers; empty for instrumentals.
    lyrics_by: &'static [&'static str],
    /// Performer when it differs from the release's artist.
    performer: Option<&'static str>,
}

const fn song(
    title: &'static str,
    length_ms: i64,
    lyrics_by: &'static [&'static str],
) -> TrackSpec {
    TrackSpec {
        title,
        length_ms,
        lyrics_by,
        performer: None,
    }
}

const fn instrumental(title: &'static str, length_ms: i64) -> TrackSpec {
    song(title, length_ms, &[])
}

struct ReleaseSpec {
    title: &'static str,
    class: &'static str,
    artist: &'static str,
    year: i64,
    genres: &'static [&'static str],
    tracks: &'static [TrackSpec],
}

const PEART: &[&str] = &["Neil Peart"];

const RELEASES: &[ReleaseSpec] = &[
    ReleaseSpec {
        title: "Moving Pictures",
        class: ALBUM,
        artist: "Rush",
        year: 1981,
        genres: &[PROG_ROCK, HARD_ROCK, ROCK],
        tracks: &[
            song("Tom Sawyer", 276_000, &["Neil Peart", "Pye Dubois"]),
            song("Red Barchetta", 370_000, PEART),
            instrumental("YYZ", 265_000),
            song("Limelight", 259_000, PEART),
            song("The Camera Eye", 658_000, PEART),
            song("Witch Hunt", 285_000, PEART),
            song("Vital Signs", 286_000, PEART),
        ],
    },
    ReleaseSpec {
        title: "The Spirit of Radio (Single)",
        class: SINGLE,
        artist: "Rush",
        year: 1980,
        genres: &[PROG_ROCK, HARD_ROCK, ROCK],
        tracks: &[
            song("The Spirit of Radio", 299_000, PEART),
            song("Circumstances", 222_000, PEART),
        ],
    },
    ReleaseSpec {
        title: "Feedback",
        class: EP,
        artist: "Rush",
        year: 2004,
        genres: &[HARD_ROCK, ROCK],
        tracks: &[
            song("Summertime Blues", 232_000, &["Eddie Cochran"]),
            song("Crossroads", 208_000, &["Robert Johnson"]),
        ],
    },
    ReleaseSpec {
        title: "Train of Thought",
        class: ALBUM,
        artist: "Dream Theater",
        year: 2003,
        genres: &[PROG_METAL, PROG_ROCK],
        tracks: &[
            song("As I Am", 467_000, &["John Petrucci"]),
            song("This Dying Soul", 687_000, &["Mike Portnoy"]),
            song("Endless Sacrifice", 683_000, &["John Petrucci"]),
            song("Honor Thy Father", 614_000, &["Mike Portnoy"]),
            song("Vacant", 178_000, &["James LaBrie"]),
            instrumental("Stream of Consciousness", 676_000),
            song("In the Name of God", 854_000, &["John Petrucci"]),
        ],
    },
    ReleaseSpec {
        title: "Liquid Tension Experiment 2",
        class: ALBUM,
        artist: "Liquid Tension Experiment",
        year: 1999,
        genres: &[INSTRUMENTAL_ROCK, PROG_METAL],
        tracks: &[
            instrumental("Acid Rain", 391_000),
            instrumental("Biaxident", 368_000),
            instrumental("When the Water Breaks", 1_019_000),
            instrumental("Chewbacca", 841_000),
            instrumental("Hourglass", 179_000),
        ],
    },
    ReleaseSpec {
        title: "Prog Anthology",
        class: COMPILATION,
        artist: VARIOUS_ARTISTS,
        year: 2010,
        genres: &[PROG_ROCK],
        tracks: &[
            TrackSpec {
                performer: Some("Rush"),
                ..song("Closer to the Heart (Live)", 186_000, PEART)
            },
            TrackSpec {
                performer: Some("Liquid Tension Experiment"),
                ..instrumental("Paradigm Shift (Live)", 553_000)
            },
        ],
    },
];

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Name of the lyrics individual attached to `track`.
#[must_use]
pub fn lyrics_name(track: &str) -> String {
    format!("'{track}' Lyrics")
}

/// Populate `graph` with the sample catalog.
pub fn populate(graph: &mut Graph) -> Result<()> {
    for genre in GENRES {
        graph.declare(GENRE, genre)?;
    }

    graph.declare(ARTIST, VARIOUS_ARTISTS)?;
    for artist in SOLO_ARTISTS {
        graph.declare(SOLO_ARTIST, artist)?;
    }
    for ensemble in ENSEMBLES {
        graph.declare(MUSICAL_ENSEMBLE, ensemble.name)?;
        for member in ensemble.members {
            graph.relate(ensemble.name, "members", member)?;
        }
    }

    for release in RELEASES {
        load_release(graph, release)?;
    }

    debug!(individuals = graph.len(), "populated sample catalog");
    Ok(())
}

fn load_release(graph: &mut Graph, release: &ReleaseSpec) -> Result<()> {
    graph.declare(release.class, release.title)?;
    graph.set_integer(release.title, "year", release.year)?;
    graph.relate(release.title, "artist", release.artist)?;

    for track in release.tracks {
        graph.declare(TRACK, track.title)?;
        graph.set_integer(track.title, "length_in_milliseconds", track.length_ms)?;
        graph.relate(
            track.title,
            "artists",
            track.performer.unwrap_or(release.artist),
        )?;
        for genre in release.genres {
            graph.relate(track.title, "genres", genre)?;
        }
        graph.relate(track.title, "album", release.title)?;

        if !track.lyrics_by.is_empty() {
            load_lyrics(graph, track)?;
        }
    }
    Ok(())
}

fn load_lyrics(graph: &mut Graph, track: &TrackSpec) -> Result<()> {
    let name = lyrics_name(track.title);
    graph.declare(LYRICS, &name)?;
    graph.set_text(
        &name,
        "text",
        &format!(
            "Words to '{}', written by {}.",
            track.title,
            track.lyrics_by.join(" and ")
        ),
    )?;
    for writer in track.lyrics_by {
        graph.relate(&name, "written_by", writer)?;
    }
    graph.relate(track.title, "lyrics", &name)
}
