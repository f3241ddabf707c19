//! The music schema: tracks, artists, albums, genres and lyrics.

use crate::error::SchemaError;
use crate::model::schema::{ClassDef, Condition, DerivedClassDef, PropertyDef, Range, Schema};
use crate::model::vocab::music::*;

/// Declare the music schema.
pub fn schema() -> Result<Schema, SchemaError> {
    let mut builder = Schema::builder();
    for class in classes() {
        builder.add_class(class)?;
    }
    for property in properties() {
        builder.add_property(property)?;
    }
    for derived in derived_classes() {
        builder.add_derived(derived)?;
    }
    builder.build()
}

fn classes() -> Vec<ClassDef> {
    vec![
        ClassDef {
            name: TRACK,
            comment: "A recorded piece of music.",
            parents: &[],
            disjoint_with: &[],
        },
        ClassDef {
            name: ARTIST,
            comment: "Anyone credited for performing or writing music.",
            parents: &[],
            disjoint_with: &[],
        },
        ClassDef {
            name: SOLO_ARTIST,
            comment: "A single person performing under their own name.",
            parents: &[ARTIST],
            disjoint_with: &[],
        },
        ClassDef {
            name: MUSICAL_ENSEMBLE,
            comment: "A group of solo artists performing together.",
            parents: &[ARTIST],
            disjoint_with: &[SOLO_ARTIST],
        },
        ClassDef {
            name: ALBUM,
            comment: "A release collecting one or more tracks.",
            parents: &[],
            disjoint_with: &[],
        },
        ClassDef {
            name: EP,
            comment: "An extended play release.",
            parents: &[ALBUM],
            disjoint_with: &[],
        },
        ClassDef {
            name: SINGLE,
            comment: "A release built around one track.",
            parents: &[ALBUM],
            disjoint_with: &[EP],
        },
        ClassDef {
            name: COMPILATION,
            comment: "A release gathering previously published tracks.",
            parents: &[ALBUM],
            disjoint_with: &[EP, SINGLE],
        },
        ClassDef {
            name: GENRE,
            comment: "A musical genre.",
            parents: &[],
            disjoint_with: &[],
        },
        ClassDef {
            name: LYRICS,
            comment: "The words sung on a track.",
            parents: &[],
            disjoint_with: &[],
        },
    ]
}

fn properties() -> Vec<PropertyDef> {
    vec![
        PropertyDef {
            name: HAS_TRACK_ARTIST,
            accessor: "artists",
            comment: "Artists performing the track.",
            domain: TRACK,
            range: Range::Class(ARTIST),
            functional: false,
            inverse: None,
        },
        PropertyDef {
            name: HAS_LENGTH_IN_MILLISECONDS,
            accessor: "length_in_milliseconds",
            comment: "Running time of the track.",
            domain: TRACK,
            range: Range::NonNegativeInteger,
            functional: true,
            inverse: None,
        },
        PropertyDef {
            name: HAS_GENRE,
            accessor: "genres",
            comment: "Genres the track belongs to.",
            domain: TRACK,
            range: Range::Class(GENRE),
            functional: false,
            inverse: None,
        },
        PropertyDef {
            name: HAS_LYRICS,
            accessor: "lyrics",
            comment: "Lyrics sung on the track; absent for instrumentals.",
            domain: TRACK,
            range: Range::Class(LYRICS),
            functional: true,
            inverse: Some(IS_LYRICS_OF),
        },
        PropertyDef {
            name: IS_FROM_ALBUM,
            accessor: "album",
            comment: "The release the track appears on.",
            domain: TRACK,
            range: Range::Class(ALBUM),
            functional: true,
            inverse: Some(HAS_TRACK),
        },
        PropertyDef {
            name: HAS_TRACK,
            accessor: "tracks",
            comment: "Tracks on the release.",
            domain: ALBUM,
            range: Range::Class(TRACK),
            functional: false,
            inverse: Some(IS_FROM_ALBUM),
        },
        PropertyDef {
            name: HAS_ALBUM_ARTIST,
            accessor: "artist",
            comment: "The artist credited for the release.",
            domain: ALBUM,
            range: Range::Class(ARTIST),
            functional: true,
            inverse: Some(HAS_ALBUM_IN_DISCOGRAPHY),
        },
        PropertyDef {
            name: HAS_YEAR,
            accessor: "year",
            comment: "Year of publication.",
            domain: ALBUM,
            range: Range::Integer,
            functional: true,
            inverse: None,
        },
        PropertyDef {
            name: HAS_ALBUM_IN_DISCOGRAPHY,
            accessor: "discography",
            comment: "Releases credited to the artist.",
            domain: ARTIST,
            range: Range::Class(ALBUM),
            functional: false,
            inverse: Some(HAS_ALBUM_ARTIST),
        },
        PropertyDef {
            name: HAS_MEMBER,
            accessor: "members",
            comment: "Solo artists playing in the ensemble.",
            domain: MUSICAL_ENSEMBLE,
            range: Range::Class(SOLO_ARTIST),
            functional: false,
            inverse: Some(IS_MEMBER_OF),
        },
        PropertyDef {
            name: IS_MEMBER_OF,
            accessor: "groups",
            comment: "Ensembles the solo artist plays in.",
            domain: SOLO_ARTIST,
            range: Range::Class(MUSICAL_ENSEMBLE),
            functional: false,
            inverse: Some(HAS_MEMBER),
        },
        PropertyDef {
            name: HAS_WRITTEN_LYRICS,
            accessor: "lyrics_written",
            comment: "Lyrics the artist wrote.",
            domain: ARTIST,
            range: Range::Class(LYRICS),
            functional: false,
            inverse: Some(IS_WRITTEN_BY),
        },
        PropertyDef {
            name: HAS_TEXT,
            accessor: "text",
            comment: "The words themselves.",
            domain: LYRICS,
            range: Range::Text,
            functional: true,
            inverse: None,
        },
        PropertyDef {
            name: IS_WRITTEN_BY,
            accessor: "written_by",
            comment: "Authors of the lyrics.",
            domain: LYRICS,
            range: Range::Class(ARTIST),
            functional: false,
            inverse: Some(HAS_WRITTEN_LYRICS),
        },
        PropertyDef {
            name: IS_LYRICS_OF,
            accessor: "track",
            comment: "The track these lyrics are sung on.",
            domain: LYRICS,
            range: Range::Class(TRACK),
            functional: true,
            inverse: Some(HAS_LYRICS),
        },
    ]
}

fn ensemble_of(name: &'static str, comment: &'static str, condition: Condition) -> DerivedClassDef {
    DerivedClassDef {
        name,
        comment,
        base: MUSICAL_ENSEMBLE,
        condition,
    }
}

fn derived_classes() -> Vec<DerivedClassDef> {
    vec![
        DerivedClassDef {
            name: VA_ALBUM,
            comment: "A release credited to Various Artists.",
            base: ALBUM,
            condition: Condition::HasValue {
                property: HAS_ALBUM_ARTIST,
                individual: VARIOUS_ARTISTS,
            },
        },
        ensemble_of(
            DUET,
            "An ensemble of exactly two members.",
            Condition::ExactCount {
                property: HAS_MEMBER,
                count: 2,
            },
        ),
        ensemble_of(
            TRIO,
            "An ensemble of exactly three members.",
            Condition::ExactCount {
                property: HAS_MEMBER,
                count: 3,
            },
        ),
        ensemble_of(
            QUARTET,
            "An ensemble of exactly four members.",
            Condition::ExactCount {
                property: HAS_MEMBER,
                count: 4,
            },
        ),
        ensemble_of(
            QUINTET,
            "An ensemble of exactly five members.",
            Condition::ExactCount {
                property: HAS_MEMBER,
                count: 5,
            },
        ),
        ensemble_of(
            BIG_BAND,
            "An ensemble of ten or more members.",
            Condition::MinCount {
                property: HAS_MEMBER,
                count: 10,
            },
        ),
        DerivedClassDef {
            name: INSTRUMENTAL_TRACK,
            comment: "A track without lyrics.",
            base: TRACK,
            condition: Condition::NoValue {
                property: HAS_LYRICS,
            },
        },
        DerivedClassDef {
            name: INSTRUMENTAL_ALBUM,
            comment: "A release whose tracks are all instrumental.",
            base: ALBUM,
            condition: Condition::AllValuesIn {
                property: HAS_TRACK,
                class: INSTRUMENTAL_TRACK,
            },
        },
    ]
}
