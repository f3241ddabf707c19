//! RDF vocabulary constants for the music ontology.
//!
//! - standard RDF/RDFS/OWL/XSD IRIs used when serializing the graph
//! - `music` local names of the schema's classes and properties; their full
//!   IRIs are minted from the ontology's base IRI

/// Standard RDF/RDFS/OWL/XSD namespace URIs
pub mod standard {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";

    pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    pub const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    pub const OWL_FUNCTIONAL_PROPERTY: &str = "http://www.w3.org/2002/07/owl#FunctionalProperty";
    pub const OWL_INVERSE_OF: &str = "http://www.w3.org/2002/07/owl#inverseOf";
    pub const OWL_DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";

    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const XSD_NON_NEGATIVE_INTEGER: &str =
        "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
}

/// Music schema local names (`music:` prefix)
pub mod music {
    pub const PREFIX: &str = "music";

    // Classes
    pub const TRACK: &str = "Track";
    pub const ARTIST: &str = "Artist";
    pub const SOLO_ARTIST: &str = "SoloArtist";
    pub const MUSICAL_ENSEMBLE: &str = "MusicalEnsemble";
    pub const ALBUM: &str = "Album";
    pub const EP: &str = "EP";
    pub const SINGLE: &str = "Single";
    pub const COMPILATION: &str = "Compilation";
    pub const GENRE: &str = "Genre";
    pub const LYRICS: &str = "Lyrics";

    // Derived classes
    pub const VA_ALBUM: &str = "VA_Album";
    pub const DUET: &str = "Duet";
    pub const TRIO: &str = "Trio";
    pub const QUARTET: &str = "Quartet";
    pub const QUINTET: &str = "Quintet";
    pub const BIG_BAND: &str = "BigBand";
    pub const INSTRUMENTAL_TRACK: &str = "InstrumentalTrack";
    pub const INSTRUMENTAL_ALBUM: &str = "InstrumentalAlbum";

    // Track properties
    pub const HAS_TRACK_ARTIST: &str = "has_track_artist";
    pub const HAS_LENGTH_IN_MILLISECONDS: &str = "has_length_in_milliseconds";
    pub const HAS_GENRE: &str = "has_genre";
    pub const HAS_LYRICS: &str = "has_lyrics";
    pub const IS_FROM_ALBUM: &str = "is_from_album";

    // Album properties
    pub const HAS_TRACK: &str = "has_track";
    pub const HAS_ALBUM_ARTIST: &str = "has_album_artist";
    pub const HAS_YEAR: &str = "has_year";

    // Artist properties
    pub const HAS_ALBUM_IN_DISCOGRAPHY: &str = "has_album_in_discography";
    pub const HAS_MEMBER: &str = "has_member";
    pub const IS_MEMBER_OF: &str = "is_member_of";
    pub const HAS_WRITTEN_LYRICS: &str = "has_written_lyrics";

    // Lyrics properties
    pub const HAS_TEXT: &str = "has_text";
    pub const IS_WRITTEN_BY: &str = "is_written_by";
    pub const IS_LYRICS_OF: &str = "is_lyrics_of";

    /// Sentinel artist credited on various-artists releases.
    pub const VARIOUS_ARTISTS: &str = "Various Artists";
}
