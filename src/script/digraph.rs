/// Normalized symbol for `hh`.
pub const HH: char = '\u{e000}';
/// Normalized symbol for `nn`.
pub const NN: char = '\u{e001}';
/// Normalized symbol for `th`.
pub const TH: char = '\u{e002}';
/// Normalized symbol for `eu`.
pub const EU: char = '\u{e003}';
/// Normalized symbol for `ng`.
pub const NG: char = '\u{e004}';
/// Normalized symbol for `ny`.
pub const NY: char = '\u{e005}';

/// Two-letter romanizations that are written as a single script symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Digraph {
    Sy,
    Ee,
    Hh,
    Nn,
    Th,
    Eu,
    Ng,
    Ny,
}

impl Digraph {
    /// Normalization order. Digraphs sharing a letter resolve by this
    /// order, e.g. `eeu` → `é` + `u` rather than `e` + `eu` symbol.
    pub const ALL: [Digraph; 8] = [
        Digraph::Sy,
        Digraph::Ee,
        Digraph::Hh,
        Digraph::Nn,
        Digraph::Th,
        Digraph::Eu,
        Digraph::Ng,
        Digraph::Ny,
    ];

    pub const fn text(self) -> &'static str {
        match self {
            Digraph::Sy => "sy",
            Digraph::Ee => "ee",
            Digraph::Hh => "hh",
            Digraph::Nn => "nn",
            Digraph::Th => "th",
            Digraph::Eu => "eu",
            Digraph::Ng => "ng",
            Digraph::Ny => "ny",
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Digraph::Sy => 'x',
            Digraph::Ee => super::E_ACUTE,
            Digraph::Hh => HH,
            Digraph::Nn => NN,
            Digraph::Th => TH,
            Digraph::Eu => EU,
            Digraph::Ng => NG,
            Digraph::Ny => NY,
        }
    }

    /// Reverse lookup for the private-use symbols. `x` and `é` are also
    /// plain input letters and are not reversed.
    pub fn from_symbol(c: char) -> Option<Digraph> {
        match c {
            HH => Some(Digraph::Hh),
            NN => Some(Digraph::Nn),
            TH => Some(Digraph::Th),
            EU => Some(Digraph::Eu),
            NG => Some(Digraph::Ng),
            NY => Some(Digraph::Ny),
            _ => None,
        }
    }
}

/// Replace every digraph in `token` with its symbol, one digraph at a time
/// in [`Digraph::ALL`] order. Each pass replaces all non-overlapping
/// occurrences. The result contains no digraph text, so normalizing it
/// again is a no-op.
pub fn normalize(token: &str) -> String {
    Digraph::ALL.iter().fold(token.to_string(), |acc, d| {
        if acc.contains(d.text()) {
            acc.replace(d.text(), d.symbol().encode_utf8(&mut [0; 4]))
        } else {
            acc
        }
    })
}

/// Expand private-use symbols back to their romanization, for display.
pub fn romanize(symbols: &str) -> String {
    symbols
        .chars()
        .map(|c| match Digraph::from_symbol(c) {
            Some(d) => d.text().to_string(),
            None => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_digraph() {
        for d in Digraph::ALL {
            assert_eq!(normalize(d.text()), d.symbol().to_string(), "{d:?}");
        }
    }

    #[test]
    fn test_symbols_are_fixed_points() {
        for d in Digraph::ALL {
            let once = normalize(d.text());
            assert_eq!(normalize(&once), once, "{d:?}");
        }
    }

    #[test]
    fn test_plain_token_untouched() {
        assert_eq!(normalize("ka"), "ka");
        assert_eq!(normalize("o"), "o");
    }

    #[test]
    fn test_every_digraph_applied() {
        assert_eq!(normalize("ngnn"), format!("{NG}{NN}"));
        assert_eq!(normalize("ngee"), format!("{NG}é"));
        assert_eq!(normalize("ngeu"), format!("{NG}{EU}"));
        assert_eq!(normalize("nyee"), format!("{NY}é"));
        assert_eq!(normalize("synn"), format!("x{NN}"));
        // `ee` is applied before `eu`, which consumes the shared `e`.
        assert_eq!(normalize("eeu"), "éu");
        assert_eq!(normalize("eeeu"), format!("é{EU}"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for token in ["ngnn", "synn", "ngee", "ngeu", "nyee", "eeeu", "thhh", "kahh"] {
            let once = normalize(token);
            assert_eq!(normalize(&once), once, "{token}");
        }
    }

    #[test]
    fn test_all_occurrences_replaced() {
        assert_eq!(normalize("eeee"), "éé");
        assert_eq!(normalize("eee"), "ée");
    }

    #[test]
    fn test_sy_becomes_x() {
        assert_eq!(normalize("sya"), "xa");
    }

    #[test]
    fn test_romanize() {
        assert_eq!(romanize(&format!("k{HH}")), "khh");
        assert_eq!(romanize(&NG.to_string()), "ng");
        assert_eq!(romanize("xé"), "xé");
    }
}
