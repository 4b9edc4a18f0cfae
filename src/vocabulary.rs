use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Start of an informally numbered statement in the whitepaper:
/// keyword, integer ordinal, optional parenthetical name, optional
/// trailing punctuation.
pub static PROSE_HEAD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(theorem|assumption)\s+(\d+)\s*(?:\(([^()\n]+)\))?[.:]?").unwrap()
});

/// Terminators for a prose statement body: blank line, the next
/// statement keyword, a heading marker. End of input is handled by the
/// extractor.
pub static PROSE_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\n[ \t]*\n|\b(?:proof|lemma|theorem|assumption)\b|\n#{1,6}[ \t]").unwrap()
});

/// Markdown-style or numbered section headings, used for best-effort
/// section attribution.
pub static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^#{1,6}[ \t]+(.+)$|^(\d+(?:\.\d+)*[ \t]+[A-Z][^\n]{2,60})$").unwrap()
});

/// A `THEOREM Name ==` or `LEMMA Name ==` declaration in a TLA+ module.
pub static FORMAL_DECL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(THEOREM|LEMMA)\s+([A-Za-z_][A-Za-z0-9_]*)\s*==").unwrap()
});

/// Terminators for a formal declaration body: the next proof or
/// declaration keyword, or the module-end marker.
pub static FORMAL_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bPROOF\b|\bLEMMA\b|\bTHEOREM\b|\n={4,}").unwrap());

/// Maximal runs of word characters; the token unit for keyword matching.
pub static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Marker that a declaration in a module carries a proof.
pub const PROOF_START_MARKER: &str = "PROOF";

/// Marker that a proof in a module has been carried to completion.
pub const PROOF_COMPLETE_MARKER: &str = "QED";

/// Domain terms that make a shared token meaningful. Matching requires
/// an overlap inside this set so that incidental words ("the", "all")
/// never pair a theorem with an unrelated declaration.
pub static IMPORTANCE_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "safety",
        "liveness",
        "consensus",
        "finalization",
        "finality",
        "finalized",
        "byzantine",
        "fault",
        "faults",
        "tolerance",
        "validator",
        "validators",
        "stake",
        "quorum",
        "certificate",
        "certificates",
        "vote",
        "votes",
        "voting",
        "block",
        "blocks",
        "slot",
        "slots",
        "leader",
        "window",
        "timeout",
        "timeouts",
        "partition",
        "synchrony",
        "asynchrony",
        "adversary",
        "adversarial",
        "honest",
        "crash",
        "crashed",
        "recovery",
        "notarization",
        "notarized",
        "votor",
        "rotor",
    ]
    .into_iter()
    .collect()
});
