use serde::{Deserialize, Serialize};

use crate::helper::{is_vowel, root_or_inflections, to_upper};
use crate::lexicon::{
    FINAL_E_PRONOUNCED, GERMANIC_OR_SLAVIC_W_NAMES, J_NAMES_PRONOUNCED_Y, SPANISH_ES_NAMES,
    SW_NAMES_ALT_SV, SW_NAMES_ALT_XV,
};
use crate::Encoder;

const DEFAULT_MAX_CODE_LENGTH: usize = 8;

/// Keys produced by [Metaphone3] for one input word.
///
/// The primary key is the most common American English pronunciation. The
/// secondary key covers an alternate pronunciation when one is plausible,
/// otherwise it is empty.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Metaphone3Result {
    primary: String,
    secondary: String,
}

impl Metaphone3Result {
    /// Primary phonetic key. Empty only for an empty input.
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Alternate phonetic key, or an empty string when the word has
    /// no distinct alternate pronunciation.
    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    /// Consume the result and return `(primary, secondary)`.
    pub fn into_pair(self) -> (String, String) {
        (self.primary, self.secondary)
    }
}

/// Events reported to the observer of [Metaphone3::metaphone3_with_trace].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TraceEvent {
    /// The scan is about to dispatch on the letter `current` at `position`.
    Dispatch { position: usize, current: char },
    /// `symbol` was appended to the primary key while scanning `position`.
    Primary { position: usize, symbol: char },
    /// `symbol` was appended to the secondary key while scanning `position`.
    Secondary { position: usize, symbol: char },
}

/// This is the [Metaphone 3](https://en.wikipedia.org/wiki/Metaphone#Metaphone_3) algorithm.
///
/// By default non-initial vowels are dropped and voiced/unvoiced consonant
/// pairs fold together ('B'/'P', 'D'/'T', 'G'/'K', 'V'/'F'), which gives the
/// loosest matching. Both behaviors can be toggled.
///
/// ```rust
/// use metaphone3::Metaphone3;
///
/// let encoder = Metaphone3::default();
///
/// let result = encoder.metaphone3("Knight");
/// assert_eq!(result.primary(), "NKT");
///
/// let exact = Metaphone3::default().with_encode_exact(true);
/// assert_eq!(exact.metaphone3("Knight").primary(), "NGT");
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Metaphone3 {
    encode_vowels: bool,
    encode_exact: bool,
    max_code_length: usize,
}

impl Metaphone3 {
    /// Construct a new [Metaphone3] with the maximum key length. A `max_code_length`
    /// of 0 falls back to the default of 8.
    ///
    /// Both keys are truncated to `max_code_length`. Rule handlers may append a
    /// multi-symbol cluster right at the limit, so keys run slightly past it
    /// internally before being cut.
    ///
    /// # Parameter
    ///
    /// * `max_code_length` : the maximum key length.
    pub fn new(max_code_length: usize) -> Self {
        let max_code_length = if max_code_length == 0 {
            DEFAULT_MAX_CODE_LENGTH
        } else {
            max_code_length
        };
        Self {
            encode_vowels: false,
            encode_exact: false,
            max_code_length,
        }
    }

    /// Keep non-initial vowels in the keys (as 'A') instead of dropping them.
    /// A run of adjacent vowel sounds still yields a single 'A'.
    pub fn with_encode_vowels(mut self, encode_vowels: bool) -> Self {
        self.encode_vowels = encode_vowels;
        self
    }

    /// Keep the voiced/unvoiced distinction between 'B' and 'P', 'D' and 'T',
    /// 'G' and 'K', and 'V' and 'F'. This does not include 'S' vs. 'Z' or
    /// "CH" vs. "SH" since those often assimilate in American English.
    pub fn with_encode_exact(mut self, encode_exact: bool) -> Self {
        self.encode_exact = encode_exact;
        self
    }

    /// Encode a word into its primary and secondary keys. Both keys are blank
    /// for a blank input, and the secondary key is blank when it would equal
    /// the primary.
    pub fn metaphone3(&self, value: &str) -> Metaphone3Result {
        self.run(value, None)
    }

    /// Same as [Self::metaphone3] but reports every dispatch and key append to
    /// `observer`, in scan order. Useful to see which rules fired for a word.
    pub fn metaphone3_with_trace(
        &self,
        value: &str,
        observer: &mut dyn FnMut(TraceEvent),
    ) -> Metaphone3Result {
        self.run(value, Some(observer))
    }

    /// Encode both words and check whether any key of the first matches any
    /// key of the second. This is the intended lookup comparison : it treats
    /// alternate pronunciations as equals.
    ///
    /// ```rust
    /// use metaphone3::Metaphone3;
    ///
    /// let encoder = Metaphone3::default();
    /// assert!(encoder.is_metaphone3_equal("Smith", "Schmidt"));
    /// ```
    pub fn is_metaphone3_equal(&self, first: &str, second: &str) -> bool {
        let first = self.metaphone3(first);
        let second = self.metaphone3(second);
        let candidates = [second.primary(), second.secondary()];

        [first.primary(), first.secondary()]
            .iter()
            .any(|key| !key.is_empty() && candidates.contains(key))
    }

    fn run(&self, value: &str, trace: Option<&mut dyn FnMut(TraceEvent)>) -> Metaphone3Result {
        if value.is_empty() {
            return Metaphone3Result::default();
        }

        let input: Vec<char> = value.chars().map(to_upper).collect();
        let word: String = input.iter().collect();
        let last = input.len() - 1;

        let mut scan = Scan {
            vowels: self.encode_vowels,
            exact: self.encode_exact,
            max: self.max_code_length,
            word,
            input,
            idx: 0,
            last,
            flag_al_inversion: false,
            primary: Vec::with_capacity(self.max_code_length + 2),
            secondary: Vec::with_capacity(self.max_code_length + 2),
            trace,
        };
        scan.run();
        scan.finish()
    }
}

/// Default [Metaphone3] with a maximum key length of 8, vowels dropped and
/// voiced/unvoiced pairs folded.
impl Default for Metaphone3 {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CODE_LENGTH)
    }
}

impl Encoder for Metaphone3 {
    fn encode(&self, s: &str) -> String {
        self.metaphone3(s).primary
    }
}

/// State for one encoding pass. Rebuilt per call so a [Metaphone3] value can
/// be shared freely.
struct Scan<'a> {
    vowels: bool,
    exact: bool,
    max: usize,
    /// Input folded to uppercase, one entry per original character.
    input: Vec<char>,
    /// `input` as a string, for whole-word lexicon lookups.
    word: String,
    idx: usize,
    last: usize,
    /// One-shot marker set when a vowel and 'L' were emitted in inverted
    /// order (e.g. the "-BLE" endings), so the following 'E' is not encoded
    /// a second time.
    flag_al_inversion: bool,
    primary: Vec<char>,
    secondary: Vec<char>,
    trace: Option<&'a mut dyn FnMut(TraceEvent)>,
}

impl Scan<'_> {
    fn run(&mut self) {
        while self.idx < self.input.len() {
            // Both buffers full means nothing more can land in the keys.
            // Deliberately >= rather than == : a handler may have pushed a
            // cluster past the limit, truncation handles it at the end.
            if self.primary.len() >= self.max && self.secondary.len() >= self.max {
                break;
            }

            let current = self.input[self.idx];
            self.emit(TraceEvent::Dispatch {
                position: self.idx,
                current,
            });

            match current {
                'B' => self.encode_b(),
                'ß' | 'Ç' => self.metaph_add('S'),
                'C' => self.encode_c(),
                'D' => self.encode_d(),
                'F' => self.encode_f(),
                'G' => self.encode_g(),
                'H' => self.encode_h(),
                'J' => self.encode_j(),
                'K' => self.encode_k(),
                'L' => self.encode_l(),
                'M' => self.encode_m(),
                'N' => self.encode_n(),
                'Ñ' => self.metaph_add('N'),
                'P' => self.encode_p(),
                'Q' => self.encode_q(),
                'R' => self.encode_r(),
                'S' => self.encode_s(),
                'T' => self.encode_t(),
                'Ð' | 'Þ' => self.metaph_add('0'),
                'V' => self.encode_v(),
                'W' => self.encode_w(),
                'X' => self.encode_x(),
                // Anomalous code points kept for compatibility with the
                // reference implementation, which dispatches on them.
                '\u{C28A}' => self.metaph_add('X'),
                '\u{C28E}' => self.metaph_add('S'),
                'Z' => self.encode_z(),
                other => {
                    if is_vowel(other) {
                        self.encode_vowels()
                    }
                }
            }

            self.idx += 1;
        }
    }

    fn finish(mut self) -> Metaphone3Result {
        self.primary.truncate(self.max);
        self.secondary.truncate(self.max);

        let primary: String = self.primary.iter().collect();
        let secondary: String = self.secondary.iter().collect();

        if primary == secondary {
            return Metaphone3Result {
                primary,
                secondary: String::new(),
            };
        }

        Metaphone3Result { primary, secondary }
    }

    fn emit(&mut self, event: TraceEvent) {
        if let Some(observer) = self.trace.as_mut() {
            observer(event);
        }
    }

    //////////////////////////////////////////////////////////////////////////
    // Context matchers
    //////////////////////////////////////////////////////////////////////////

    /// Check if any of `candidates` starts at `offset` runes from the cursor.
    /// Out-of-range comparisons are false. `candidates` must be ordered from
    /// shortest to longest : matching stops at the first candidate that runs
    /// past the end of the input, to stay key-compatible with the reference
    /// implementation.
    fn string_at(&self, offset: isize, candidates: &[&str]) -> bool {
        let start = self.idx as isize + offset;
        if start < 0 {
            return false;
        }
        let start = start as usize;
        if start >= self.input.len() || start + candidates[0].len() > self.input.len() {
            return false;
        }

        'candidates: for candidate in candidates {
            if start + candidate.len() > self.input.len() {
                return false;
            }
            for (i, c) in candidate.chars().enumerate() {
                if self.input[start + i] != c {
                    continue 'candidates;
                }
            }
            return true;
        }

        false
    }

    /// Like [Self::string_at] but the match must also sit at the start of the
    /// input.
    fn string_at_start(&self, offset: isize, candidates: &[&str]) -> bool {
        offset == -(self.idx as isize) && self.string_at(offset, candidates)
    }

    /// Like [Self::string_at] but the match must also consume the rest of the
    /// input. Shorter candidates that fit but stop early are skipped.
    fn string_at_end(&self, offset: isize, candidates: &[&str]) -> bool {
        let start = self.idx as isize + offset;
        if start < 0 {
            return false;
        }
        let start = start as usize;
        if start >= self.input.len() || start + candidates[0].len() > self.input.len() {
            return false;
        }

        'candidates: for candidate in candidates {
            let stop = start + candidate.len();
            if stop > self.input.len() {
                return false;
            }
            if stop < self.input.len() {
                continue;
            }
            for (i, c) in candidate.chars().enumerate() {
                if self.input[start + i] != c {
                    continue 'candidates;
                }
            }
            return true;
        }

        false
    }

    /// Check if the input starts with any of `candidates`.
    fn string_start(&self, candidates: &[&str]) -> bool {
        self.string_at(-(self.idx as isize), candidates)
    }

    /// Check if the input ends with any of `candidates`.
    fn string_end(&self, candidates: &[&str]) -> bool {
        'candidates: for candidate in candidates {
            if candidate.len() > self.input.len() {
                return false;
            }
            let start = self.input.len() - candidate.len();
            for (i, c) in candidate.chars().enumerate() {
                if self.input[start + i] != c {
                    continue 'candidates;
                }
            }
            return true;
        }

        false
    }

    /// Check if the whole input equals any of `candidates`, which must be
    /// ordered from shortest to longest.
    fn string_exact(&self, candidates: &[&str]) -> bool {
        for candidate in candidates {
            if candidate.len() > self.input.len() {
                return false;
            }
            if candidate.len() == self.input.len()
                && candidate.chars().zip(self.input.iter()).all(|(a, b)| a == *b)
            {
                return true;
            }
        }

        false
    }

    /// Whole-word membership in a lexicon set.
    fn word_in(&self, lexicon: &std::collections::HashSet<&'static str>) -> bool {
        lexicon.contains(self.word.as_str())
    }

    /// Check if the input contains `candidate` anywhere.
    fn string_contains(&self, candidate: &str) -> bool {
        self.word.contains(candidate)
    }

    /// Check the rune at `offset` runes from the cursor, false when out of
    /// range.
    fn char_at(&self, offset: isize, c: char) -> bool {
        let at = self.idx as isize + offset;
        if at < 0 || at as usize >= self.input.len() {
            return false;
        }

        self.input[at as usize] == c
    }

    fn char_next_is(&self, c: char) -> bool {
        self.char_at(1, c)
    }

    /// Check for a vowel at `offset` runes from the cursor, false when out of
    /// range.
    fn is_vowel_at(&self, offset: isize) -> bool {
        let at = self.idx as isize + offset;
        if at < 0 || at as usize >= self.input.len() {
            return false;
        }

        is_vowel(self.input[at as usize])
    }

    //////////////////////////////////////////////////////////////////////////
    // Key buffers
    //////////////////////////////////////////////////////////////////////////

    fn metaph_add(&mut self, c: char) {
        self.metaph_add_alt(Some(c), Some(c));
    }

    /// Append to the two keys independently. `None` skips a channel, which is
    /// how a rule records a symbol for only one pronunciation. An 'A' is
    /// never appended right after another 'A' : a vowel run collapses to one
    /// symbol.
    fn metaph_add_alt(&mut self, primary: Option<char>, secondary: Option<char>) {
        if let Some(c) = primary {
            if !(c == 'A' && self.primary.last() == Some(&'A')) {
                self.primary.push(c);
                self.emit(TraceEvent::Primary {
                    position: self.idx,
                    symbol: c,
                });
            }
        }

        if let Some(c) = secondary {
            if !(c == 'A' && self.secondary.last() == Some(&'A')) {
                self.secondary.push(c);
                self.emit(TraceEvent::Secondary {
                    position: self.idx,
                    symbol: c,
                });
            }
        }
    }

    /// Append a cluster to each key. The whole-string "A" is subject to the
    /// same vowel-run collapse as the single-rune append.
    fn metaph_add_str(&mut self, primary: &str, secondary: &str) {
        if !(primary == "A" && self.primary.last() == Some(&'A')) {
            for c in primary.chars() {
                self.primary.push(c);
                self.emit(TraceEvent::Primary {
                    position: self.idx,
                    symbol: c,
                });
            }
        }

        if !(secondary == "A" && self.secondary.last() == Some(&'A')) {
            for c in secondary.chars() {
                self.secondary.push(c);
                self.emit(TraceEvent::Secondary {
                    position: self.idx,
                    symbol: c,
                });
            }
        }
    }

    fn metaph_add_exact_approx(&mut self, exact: &str, approx: &str) {
        if self.exact {
            self.metaph_add_str(exact, exact);
        } else {
            self.metaph_add_str(approx, approx);
        }
    }

    fn metaph_add_exact_approx_alt(
        &mut self,
        exact: &str,
        alt_exact: &str,
        approx: &str,
        alt_approx: &str,
    ) {
        if self.exact {
            self.metaph_add_str(exact, alt_exact);
        } else {
            self.metaph_add_str(approx, alt_approx);
        }
    }

    //////////////////////////////////////////////////////////////////////////
    // Cursor movement
    //////////////////////////////////////////////////////////////////////////

    /// Advance the cursor by one of two amounts depending on whether vowels
    /// are encoded.
    fn advance_counter(&mut self, no_encode_vowel: usize, encode_vowel: usize) {
        if self.vowels {
            self.idx += encode_vowel;
        } else {
            self.idx += no_encode_vowel;
        }
    }

    /// Starting from `at`, return the index of the last rune of the vowel run
    /// (vowels plus silent 'W's), or `at - 1` when there is none. Stops short
    /// of Polish name endings like "-OWICZ" whose 'W' is pronounced.
    fn skip_vowels(&self, at: usize) -> usize {
        if at >= self.input.len() {
            return self.input.len();
        }

        let mut it = self.input[at];
        let mut offset = at as isize - self.idx as isize;

        while is_vowel(it) || it == 'W' {
            if self.string_at(offset, &["WICZ", "WITZ", "WIAK"])
                || self.string_at(offset - 1, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
                || self.string_at_end(offset, &["WICKI", "WACKI"])
            {
                break;
            }

            offset += 1;

            if self.char_at(offset - 1, 'W')
                && self.char_at(offset, 'H')
                && !self.string_at(
                    offset,
                    &[
                        "HOP", "HIDE", "HARD", "HEAD", "HAWK", "HERD", "HOOK", "HAND", "HOLE",
                        "HEART", "HOUSE", "HOUND", "HAMMER",
                    ],
                )
            {
                offset += 1;
            }

            if self.idx as isize + offset > self.last as isize {
                break;
            }

            it = self.input[(self.idx as isize + offset) as usize];
        }

        assert!(
            offset >= 1,
            "vowel skip computed a backward cursor move at {}",
            self.idx
        );
        (self.idx as isize + offset - 1) as usize
    }

    /// Detect spellings typical for Slavic and Germanic family names, which
    /// flip several digraph rules.
    fn is_slavo_germanic(&self) -> bool {
        self.string_start(&["SCH", "SW"]) || self.input[0] == 'J' || self.input[0] == 'W'
    }

    //////////////////////////////////////////////////////////////////////////
    // 'B'
    //////////////////////////////////////////////////////////////////////////

    fn encode_b(&mut self) {
        if self.encode_silent_b() {
            return;
        }

        // "-mb" as in "dumb" is already skipped over under 'M'
        self.metaph_add_exact_approx("B", "P");

        // skip double B, or BPx where x isn't H
        if self.char_next_is('B')
            || (self.char_next_is('P')
                && self.idx + 2 < self.input.len()
                && self.input[self.idx + 2] != 'H')
        {
            self.idx += 1;
        }
    }

    /// Silent 'B' for cases not covered under "-mb-".
    fn encode_silent_b(&mut self) -> bool {
        // 'debt', 'doubt', 'subtle'
        if self.string_at(-2, &["DEBT", "SUBTL", "SUBTIL"]) || self.string_at(-3, &["DOUBT"]) {
            self.metaph_add('T');
            self.idx += 1;
            return true;
        }

        false
    }

    //////////////////////////////////////////////////////////////////////////
    // 'C'
    //////////////////////////////////////////////////////////////////////////

    fn encode_c(&mut self) {
        if self.encode_silent_c_at_beginning()
            || self.encode_ca_to_s()
            || self.encode_co_to_s()
            || self.encode_ch()
            || self.encode_ccia()
            || self.encode_cc()
            || self.encode_ck_cg_cq()
            || self.encode_c_front_vowel()
            || self.encode_silent_c()
            || self.encode_cz()
            || self.encode_cs()
        {
            return;
        }

        if !self.string_at(-1, &["C", "K", "G", "Q"]) {
            self.metaph_add('K');
        }

        // name sent in 'mac caffrey', 'mac gregor'
        if self.string_at(1, &[" C", " Q", " G"]) {
            self.idx += 1;
        } else if self.string_at(1, &["C", "K", "Q"]) && !self.string_at(1, &["CE", "CI"]) {
            self.idx += 1;
            // account for combinations such as Ro-ckc-liffe
            if self.string_at(1, &["C", "K", "Q"]) && !self.string_at(2, &["CE", "CI"]) {
                self.idx += 1;
            }
        }
    }

    fn encode_silent_c_at_beginning(&mut self) -> bool {
        self.idx == 0 && self.string_at(0, &["CT", "CN"])
    }

    /// Exceptions where "-CA-" encodes to S instead of K, including words
    /// spelled without the cedilla their source language uses.
    fn encode_ca_to_s(&mut self) -> bool {
        // special case: 'caesar'
        // also, where cedilla not used, as in "linguica" => LNKS
        if (self.idx == 0 && self.string_at(0, &["CAES", "CAEC", "CAEM"]))
            || self.string_start(&[
                "FACADE", "FRANCAIS", "FRANCAIX", "LINGUICA", "GONCALVES", "PROVENCAL",
            ])
        {
            self.metaph_add('S');
            self.advance_counter(1, 0);
            return true;
        }

        false
    }

    /// Exceptions where "-CO-" encodes to S instead of K, including words
    /// spelled without the cedilla their source language uses.
    fn encode_co_to_s(&mut self) -> bool {
        // e.g. 'coelecanth' => SLKN0
        if (self.string_at(0, &["COEL"]) && (self.is_vowel_at(4) || self.idx + 3 == self.last))
            || self.string_at(0, &["COENA", "COENO"])
            || self.string_start(&["GARCON", "FRANCOIS", "MELANCON"])
        {
            self.metaph_add('S');
            self.advance_counter(2, 0);
            return true;
        }

        false
    }

    fn encode_ch(&mut self) -> bool {
        if !self.string_at(0, &["CH"]) {
            return false;
        }

        if self.encode_chae()
            || self.encode_ch_to_h()
            || self.encode_silent_ch()
            || self.encode_arch()
            || self.encode_ch_to_x()
            || self.encode_english_ch_to_k()
            || self.encode_germanic_ch_to_k()
            || self.encode_greek_ch_initial()
            || self.encode_greek_ch_non_initial()
        {
            return true;
        }

        if self.idx > 0 {
            if self.string_start(&["MC"]) && self.idx == 1 {
                // e.g. "McHugh"
                self.metaph_add('K');
            } else {
                self.metaph_add_alt(Some('X'), Some('K'));
            }
        } else {
            self.metaph_add('X');
        }

        self.idx += 1;
        true
    }

    fn encode_chae(&mut self) -> bool {
        // e.g. 'michael'
        if self.idx > 0 && self.string_at(2, &["AE"]) {
            if self.string_start(&["RACHAEL"]) {
                self.metaph_add('X');
            } else if !self.string_at(-1, &["C", "K", "G", "Q"]) {
                self.metaph_add('K');
            }

            self.advance_counter(3, 1);
            return true;
        }

        false
    }

    /// Transliterations from the hebrew where the sound 'kh' is spelled
    /// "-CH-". The usual english pronunciation is 'h' or 'kh', and alternate
    /// spellings most often use "-H-".
    fn encode_ch_to_h(&mut self) -> bool {
        // hebrew => 'H', e.g. 'channukah', 'chabad'
        if (self.idx == 0
            && self.string_at(
                2,
                &[
                    "AIM", "ETH", "ELM", "ASID", "AZAN", "UPPAH", "UTZPA", "ALLAH", "ALUTZ",
                    "AMETZ", "ESHVAN", "ADARIM", "ANUKAH", "ALLLOTH", "ANNUKAH", "AROSETH",
                ],
            ))
            || self.string_at(-3, &["CLACHAN"])
        {
            self.metaph_add('H');
            self.advance_counter(2, 1);
            return true;
        }

        false
    }

    fn encode_silent_ch(&mut self) -> bool {
        if self.string_at(-2, &["YACHT", "FUCHSIA"])
            || self.string_start(&["STRACHAN", "CRICHTON"])
            || (self.string_at(-3, &["DRACHM"]) && !self.string_at(-3, &["DRACHMA"]))
        {
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_ch_to_x(&mut self) -> bool {
        // e.g. 'approach', 'beach'
        if (self.string_at(-2, &["OACH", "EACH", "EECH", "OUCH", "OOCH", "MUCH", "SUCH"])
            && !self.string_at(-3, &["JOACH"]))
            // e.g. 'dacha', 'macho'
            || self.string_at_end(-1, &["ACHA", "ACHO"])
            || self.string_at_end(0, &["CHOT", "CHOD", "CHAT"])
            || (self.string_at_end(-1, &["OCHE"]) && !self.string_at(-2, &["DOCHE"]))
            || self.string_at(-4, &["ATTACH", "DETACH", "KOVACH", "PARACHUT"])
            || self.string_at(-5, &["SPINACH", "MASSACHU"])
            || self.string_start(&["MACHAU"])
            // no ACHE
            || (self.string_at(-3, &["THACH"]) && !self.string_at(2, &["E"]))
            || self.string_at(-2, &["VACHON"])
        {
            self.metaph_add('X');
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_english_ch_to_k(&mut self) -> bool {
        // 'ache', 'echo', alternate spelling of 'michael'
        if (self.idx == 1 && root_or_inflections(&self.input, "ACHE"))
            || ((self.idx > 3 && root_or_inflections(&self.input[self.idx - 1..], "ACHE"))
                && self.string_start(&["EAR", "HEAD", "BACK", "HEART", "BELLY", "TOOTH"]))
            || self.string_at(-1, &["ECHO"])
            || self.string_at(-2, &["MICHEAL"])
            || self.string_at(-4, &["JERICHO"])
            || self.string_at(-5, &["LEPRECH"])
        {
            self.metaph_add_alt(Some('K'), Some('X'));
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_germanic_ch_to_k(&mut self) -> bool {
        // "<consonant><vowel>CH-" implies a german word where 'ch' => K
        if (self.idx > 1
            && !self.is_vowel_at(-2)
            && self.string_at(-1, &["ACH"])
            && !self.string_at(-2, &["MACHADO", "MACHUCA", "LACHANC", "LACHAPE", "KACHATU"])
            && !self.string_at(-3, &["KHACHAT"])
            && (!self.char_at(2, 'I')
                && (!self.char_at(2, 'E')
                    || self.string_at(-2, &["BACHER", "MACHER", "MACHEN", "LACHER"])))
            // e.g. 'brecht', 'fuchs'
            || (self.string_at(2, &["T", "S"])
                && !(self.string_start(&["WHICHSOEVER", "LUNCHTIME"])))
            // e.g. 'andromache'
            || self.string_start(&["SCHR"])
            || (self.idx > 2 && self.string_at(-2, &["MACHE"]))
            || (self.idx == 2 && self.string_at(-2, &["ZACH"]))
            || self.string_at(-4, &["SCHACH"])
            || self.string_at(-1, &["ACHEN"])
            || self.string_at(-3, &["SPICH", "ZURCH", "BUECH"])
            // "kirch" and "blech" both get 'X'
            || (self.string_at(-3, &["KIRCH", "JOACH", "BLECH", "MALCH"])
                && !(self.string_at(-3, &["KIRCHNER"]) || self.idx + 1 == self.last))
            || self.string_at_end(-2, &["NICH", "LICH", "BACH"])
            || (self.string_at_end(-3, &["URICH", "BRICH", "ERICH", "DRICH", "NRICH"])
                && !self.string_at_end(-5, &["ALDRICH"])
                && !self.string_at_end(-6, &["GOODRICH"])
                && !self.string_at_end(-7, &["GINGERICH"])))
            || self.string_at_end(-4, &["ULRICH", "LFRICH", "LLRICH", "EMRICH", "ZURICH", "EYRICH"])
            // e.g. 'wachtler', 'wechsler', but not 'tichner'
            || ((self.string_at(-1, &["A", "O", "U", "E"]) || self.idx == 0)
                && self.string_at(2, &["L", "R", "N", "M", "B", "H", "F", "V", "W", " "]))
        {
            // "CHR/L-" e.g. 'chris' do not get alt pronunciation of 'X'
            if self.string_at(2, &["R", "L"]) || self.is_slavo_germanic() {
                self.metaph_add('K');
            } else {
                self.metaph_add_alt(Some('K'), Some('X'));
            }
            self.idx += 1;
            return true;
        }

        false
    }

    /// "-ARCH-". Some occurrences are from greek roots and encode to 'K',
    /// others are from english words and encode to 'X'.
    fn encode_arch(&mut self) -> bool {
        if self.string_at(-2, &["ARCH"]) {
            // "-ARCH-" has many combining forms where "-CH-" => K because of
            // its derivation from the greek
            if ((self.is_vowel_at(2)
                && self.string_at(-2, &["ARCHA", "ARCHI", "ARCHO", "ARCHU", "ARCHY"]))
                || self.string_at(
                    -2,
                    &[
                        "ARCHEA", "ARCHEG", "ARCHEO", "ARCHET", "ARCHEL", "ARCHES", "ARCHEP",
                        "ARCHEM", "ARCHEN",
                    ],
                )
                || self.string_at_end(-2, &["ARCH"])
                || self.string_start(&["MENARCH"]))
                && (!root_or_inflections(&self.input, "ARCH")
                    && !self.string_at(-4, &["SEARCH", "POARCH"])
                    && !self.string_start(&[
                        "ARCHER",
                        "ARCHIE",
                        "ARCHENEMY",
                        "ARCHIBALD",
                        "ARCHULETA",
                        "ARCHAMBAU",
                    ])
                    && !((((self.string_at(-3, &["LARCH", "MARCH", "PARCH"])
                        || self.string_at(-4, &["STARCH"]))
                        && !self.string_start(&[
                            "EPARCH",
                            "NOMARCH",
                            "EXILARCH",
                            "HIPPARCH",
                            "MARCHESE",
                            "ARISTARCH",
                            "MARCHETTI",
                        ]))
                        || root_or_inflections(&self.input, "STARCH"))
                        && (!self.string_at(-2, &["ARCHU", "ARCHY"])
                            || self.string_start(&["STARCHY"]))))
            {
                self.metaph_add_alt(Some('K'), Some('X'));
            } else {
                self.metaph_add('X');
            }
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_greek_ch_initial(&mut self) -> bool {
        // greek roots e.g. 'chemistry', 'chorus', ch at beginning of root
        if (self.string_at(
            0,
            &[
                "CHAMOM", "CHARAC", "CHARIS", "CHARTO", "CHARTU", "CHARYB", "CHRIST", "CHEMIC",
                "CHILIA",
            ],
        ) || (self.string_at(
            0,
            &[
                "CHEMI", "CHEMO", "CHEMU", "CHEMY", "CHOND", "CHONA", "CHONI", "CHOIR", "CHASM",
                "CHARO", "CHROM", "CHROI", "CHAMA", "CHALC", "CHALD", "CHAET", "CHIRO", "CHILO",
                "CHELA", "CHOUS", "CHEIL", "CHEIR", "CHEIM", "CHITI", "CHEOP",
            ],
        ) && !(self.string_at(0, &["CHEMIN"]) || self.string_at(-2, &["ANCHONDO"])))
            || (self.string_at(0, &["CHISM", "CHELI"])
                // exclude spanish "machismo"
                && !(self.string_start(&["MICHEL", "MACHISMO", "RICHELIEU", "REVANCHISM"])
                    || self.string_exact(&["CHISM"])))
            // include e.g. "chorus", "chyme", "chaos"
            || (self.string_at(0, &["CHOR", "CHOL", "CHYM", "CHYL", "CHLO", "CHOS", "CHUS", "CHOE"])
                && !self.string_start(&["CHOLLO", "CHOLLA", "CHORIZ"]))
            // "chaos" => K but not "chao"
            || (self.string_at(0, &["CHAO"]) && self.idx + 3 != self.last)
            // e.g. "abranchiate"
            || (self.string_at(0, &["CHIA"]) && !(self.string_start(&["CHIAPAS", "APPALACHIA"])))
            // e.g. "chimera"
            || self.string_at(0, &["CHIMERA", "CHIMAER", "CHIMERI"])
            // e.g. "chameleon"
            || self.string_start(&["CHAME", "CHELO", "CHITO"])
            // e.g. "spirochete"
            || ((self.idx + 4 == self.last || self.idx + 5 == self.last)
                && self.string_at(-1, &["OCHETE"])))
            // more exceptions where "-CH-" => X e.g. "chortle", "crocheter"
            && !(self.string_exact(&["CHORE", "CHOLO", "CHOLA"])
                || self.string_at(0, &["CHORT", "CHOSE"])
                || self.string_at(-3, &["CROCHET"])
                || self.string_start(&["CHEMISE", "CHARISE", "CHARISS", "CHAROLE"]))
        {
            if self.string_at(2, &["R", "L"]) {
                self.metaph_add('K');
            } else {
                self.metaph_add_alt(Some('K'), Some('X'));
            }
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_greek_ch_non_initial(&mut self) -> bool {
        // greek & other roots e.g. 'tachometer', 'orchid', ch in middle or
        // end of root
        if self.string_at(
            -2,
            &[
                "LYCHN", "TACHO", "ORCHO", "ORCHI", "LICHO", "ORCHID", "NICHOL", "MECHAN",
                "LICHEN", "MACHIC", "PACHEL", "RACHIF", "RACHID", "RACHIS", "RACHIC", "MICHAL",
                "ORCHESTR",
            ],
        ) || self.string_at(
            -3,
            &[
                "MELCH", "GLOCH", "TRACH", "TROCH", "BRACH", "SYNCH", "PSYCH", "STICH", "PULCH",
                "EPOCH",
            ],
        ) || (self.string_at(-3, &["TRICH"]) && !self.string_at(-5, &["OSTRICH"]))
            || (self.string_at(
                -2,
                &[
                    "TYCH", "TOCH", "BUCH", "MOCH", "CICH", "DICH", "NUCH", "EICH", "LOCH",
                    "DOCH", "ZECH", "WYCH",
                ],
            ) && !(self.string_at(-4, &["INDOCHINA"]) || self.string_at(-2, &["BUCHON"])))
            || ((self.idx == 1 || self.idx == 2)
                && self.string_at(-1, &["OCHER", "ECHIN", "ECHID"]))
            || self.string_at(
                -4,
                &[
                    "BRONCH", "STOICH", "STRYCH", "TELECH", "PLANCH", "CATECH", "MANICH",
                    "MALACH", "BIANCH", "DIDACH", "BRANCHIO", "BRANCHIF",
                ],
            )
            || self.string_start(&["ICHA", "ICHN"])
            || (self.string_at(-1, &["ACHAB", "ACHAD", "ACHAN", "ACHAZ"])
                && !self.string_at(-2, &["MACHADO", "LACHANC"]))
            || self.string_at(
                -1,
                &[
                    "ACHISH", "ACHILL", "ACHAIA", "ACHENE", "ACHAIAN", "ACHATES", "ACHIRAL",
                    "ACHERON", "ACHILLEA", "ACHIMAAS", "ACHILARY", "ACHELOUS", "ACHENIAL",
                    "ACHERNAR", "ACHALASIA", "ACHILLEAN", "ACHIMENES", "ACHIMELECH", "ACHITOPHEL",
                ],
            )
            // e.g. 'inchoate', 'ischemia'
            || (self.idx == 2 && (self.string_start(&["INCHOA"]))
                || self.string_start(&["ISCH"]))
            // e.g. 'ablimelech', 'antioch', 'pentateuch'
            || (self.idx + 1 == self.last
                && self.string_at(-1, &["A", "O", "U", "E"])
                && !(self.string_start(&["DEBAUCH"])
                    || self.string_at(-2, &["MUCH", "SUCH", "KOCH"])
                    || self.string_at(-5, &["OODRICH", "ALDRICH"])))
        {
            self.metaph_add_alt(Some('K'), Some('X'));
            self.idx += 1;
            return true;
        }

        false
    }

    /// Reliably italian "-CCIA-".
    fn encode_ccia(&mut self) -> bool {
        // e.g. 'focaccia'
        if self.string_at(1, &["CIA"]) {
            self.metaph_add_alt(Some('X'), Some('S'));
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_cc(&mut self) -> bool {
        // double 'C', but not if e.g. 'McClellan'
        if self.string_at(0, &["CC"]) && !(self.idx == 1 && self.input[0] == 'M') {
            // exception
            if self.string_at(-3, &["FLACCID"]) {
                self.metaph_add('S');
                self.advance_counter(2, 1);
                return true;
            }

            // 'bacci', 'bertucci', other italian
            if self.string_at_end(2, &["I"])
                || self.string_at(2, &["IO"])
                || self.string_at_end(2, &["INO", "INI"])
            {
                self.metaph_add('X');
                self.advance_counter(2, 1);
                return true;
            }

            // 'accident', 'accede', 'succeed'
            // except 'bellocchio', 'bacchus', 'soccer' get K
            if self.string_at(2, &["I", "E", "Y"])
                && !(self.char_at(2, 'H') || self.string_at(-2, &["SOCCER"]))
            {
                self.metaph_add_str("KS", "KS");
                self.advance_counter(2, 1);
                return true;
            }

            // Pierce's rule
            self.metaph_add('K');
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_ck_cg_cq(&mut self) -> bool {
        if self.string_at(0, &["CK", "CG", "CQ"]) {
            // eastern european spelling e.g. 'gorecki' == 'goresky'
            if self.string_at_end(0, &["CKI", "CKY"]) && self.input.len() > 6 {
                self.metaph_add_str("K", "SK");
            } else {
                self.metaph_add('K');
            }

            // skip the C
            self.idx += 1;
            // if there's a C[KGQ][KGQ] then skip that second one too
            if self.string_at(1, &["K", "G", "Q"]) {
                self.idx += 1;
            }

            return true;
        }

        false
    }

    /// "C" before a front vowel such as "E", "I", or "Y", which most likely
    /// encodes to S or X.
    fn encode_c_front_vowel(&mut self) -> bool {
        if self.string_at(0, &["CI", "CE", "CY"]) {
            if self.encode_british_silent_ce()
                || self.encode_ce()
                || self.encode_ci()
                || self.encode_latinate_suffixes()
            {
                self.advance_counter(1, 0);
                return true;
            }

            self.metaph_add('S');
            self.advance_counter(1, 0);
            return true;
        }

        false
    }

    fn encode_british_silent_ce(&mut self) -> bool {
        // english place names like e.g. 'gloucester' pronounced glo-ster
        self.string_at_end(1, &["ESTER"]) || self.string_at(1, &["ESTERSHIRE"])
    }

    fn encode_ce(&mut self) -> bool {
        // 'ocean', 'commercial', 'provincial', 'cello', 'fettucini', 'medici'
        if (self.string_at(1, &["EAN"]) && self.is_vowel_at(-1))
            // e.g. 'rosacea'
            || (self.string_at_end(-1, &["ACEA"]) && !self.string_start(&["PANACEA"]))
            // e.g. 'botticelli', 'concerto'
            || self.string_at(1, &["ELLI", "ERTO", "EORL"])
            // some italian names familiar to americans
            || self.string_at_end(-3, &["CROCE"])
            || self.string_at(-3, &["DOLCE"])
            // e.g. 'cello'
            || self.string_at_end(1, &["ELLO"])
        {
            self.metaph_add_alt(Some('X'), Some('S'));
            return true;
        }

        false
    }

    fn encode_ci(&mut self) -> bool {
        // with consonant before C
        // e.g. 'fettucini', but exception for the americanized pronunciation
        // of 'mancini'
        if (self.string_at_end(1, &["INI"]) && !self.string_exact(&["MANCINI"]))
            // e.g. 'medici'
            || self.string_at_end(-1, &["ICI"])
            // e.g. 'commercial', 'provincial', 'cistercian'
            || self.string_at(-1, &["RCIAL", "NCIAL", "RCIAN", "UCIUS"])
            // special cases
            || self.string_at(-3, &["MARCIA"])
            || self.string_at(-2, &["ANCIENT"])
        {
            self.metaph_add_alt(Some('X'), Some('S'));
            return true;
        }

        // exception
        if self.string_at(-4, &["COERCION"]) {
            self.metaph_add('J');
            return true;
        }

        // with vowel before C (or at beginning?)
        if (self.string_at(0, &["CIO", "CIE", "CIA"]) && self.is_vowel_at(-1))
            || self.string_at(1, &["IAO"])
        {
            if (self.string_at(0, &["CIAN", "CIAL", "CIAO", "CIES", "CIOL", "CION"])
                // exception - "glacier" => 'X' but "spacier" => 'S'
                || self.string_at(-3, &["GLACIER"])
                || self.string_at(
                    0,
                    &[
                        "CIENT", "CIENC", "CIOUS", "CIATE", "CIATI", "CIATO", "CIABL", "CIARY",
                    ],
                )
                || self.string_at_end(0, &["CIA", "CIO", "CIAS", "CIOS"]))
                && !(self.string_at(-4, &["ASSOCIATION"])
                    || self.string_start(&["OCIE"])
                    // exceptions mostly because these names are usually from
                    // the spanish rather than the italian in america
                    || self.string_at(
                        -2,
                        &["LUCIO", "SOCIO", "SOCIE", "MACIAS", "LUCIANO", "HACIENDA"],
                    )
                    || self.string_at(-3, &["GRACIE", "GRACIA", "MARCIANO"])
                    || self.string_at(-4, &["PALACIO", "POLICIES", "FELICIANO"])
                    || self.string_at(-5, &["MAURICIO"])
                    || self.string_at(-6, &["ANDALUCIA"])
                    || self.string_at(-7, &["ENCARNACION"]))
            {
                self.metaph_add_alt(Some('X'), Some('S'));
            } else {
                self.metaph_add_alt(Some('S'), Some('X'));
            }

            return true;
        }

        false
    }

    fn encode_latinate_suffixes(&mut self) -> bool {
        if self.string_at(1, &["EOUS", "IOUS"]) {
            self.metaph_add_alt(Some('X'), Some('S'));
            return true;
        }

        false
    }

    fn encode_silent_c(&mut self) -> bool {
        self.string_at(1, &["T", "S"]) && self.string_start(&["INDICT", "TUCSON", "CONNECTICUT"])
    }

    /// Slavic spellings or transliterations written as "-CZ-".
    fn encode_cz(&mut self) -> bool {
        if self.string_at(1, &["Z"]) && !self.string_at(-1, &["ECZEMA"]) {
            if self.string_at(0, &["CZAR"]) {
                self.metaph_add('S');
            } else {
                // otherwise most likely a czech word
                self.metaph_add('X');
            }
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_cs(&mut self) -> bool {
        // give an 'etymological' 2nd encoding for "kovacs" so that it
        // matches "kovach"
        if self.string_start(&["KOVACS"]) {
            self.metaph_add_str("KS", "X");
            self.idx += 1;
            return true;
        }

        if self.string_at_end(-1, &["ACS"]) && !self.string_at(-4, &["ISAACS"]) {
            self.metaph_add('X');
            self.idx += 1;
            return true;
        }

        false
    }

    //////////////////////////////////////////////////////////////////////////
    // 'D'
    //////////////////////////////////////////////////////////////////////////

    fn encode_d(&mut self) {
        if self.encode_dg()
            || self.encode_dj()
            || self.encode_dt_dd()
            || self.encode_d_to_j()
            || self.encode_dous()
            || self.encode_silent_d()
        {
            return;
        }

        if self.exact {
            // "final de-voicing", e.g. 'missed' == 'mist'
            if self.string_at_end(-3, &["SSED"]) {
                self.metaph_add('T');
            } else {
                self.metaph_add('D');
            }
        } else {
            self.metaph_add('T');
        }
    }

    fn encode_dg(&mut self) -> bool {
        if self.string_at(0, &["DG"]) {
            // excludes exceptions e.g. 'edgar', or cases where 'g' is the
            // first letter of a combining form e.g. 'handgun', 'waldglas'
            if self.string_at(2, &["A", "O"])
                // e.g. "midgut", "handgrip", "mudgard", "woodgrouse"
                || self.string_at(
                    1,
                    &[
                        "GUN", "GUT", "GEAR", "GLAS", "GRIP", "GREN", "GILL", "GRAF", "GUARD",
                        "GUILT", "GRAVE", "GRASS", "GROUSE",
                    ],
                )
            {
                self.metaph_add_exact_approx("DG", "TK");
            } else {
                // e.g. "edge", "abridgment"
                self.metaph_add('J');
            }

            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_dj(&mut self) -> bool {
        // e.g. "adjacent"
        if self.string_at(0, &["DJ"]) {
            self.metaph_add('J');
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_dt_dd(&mut self) -> bool {
        // eat redundant 'T' or 'D'
        if self.string_at(0, &["DT", "DD"]) {
            if self.string_at(0, &["DTH"]) {
                self.metaph_add_exact_approx("D0", "T0");
                self.idx += 2;
            } else {
                if self.exact {
                    // devoice it
                    if self.string_at(0, &["DT"]) {
                        self.metaph_add('T');
                    } else {
                        self.metaph_add('D');
                    }
                } else {
                    self.metaph_add('T');
                }
                self.idx += 1;
            }

            return true;
        }

        false
    }

    fn encode_d_to_j(&mut self) -> bool {
        // e.g. "module", "adulate"
        if (self.string_at(0, &["DUL"]) && self.is_vowel_at(-1) && self.is_vowel_at(3))
            // e.g. "soldier", "grandeur", "procedure"
            || self.string_at_end(-1, &["LDIER", "NDEUR", "EDURE", "RDURE"])
            || self.string_at(-3, &["CORDIAL"])
            // e.g. "pendulum", "education", "individual", "residuum"
            || self.string_at(-1, &["ADUA", "IDUA", "IDUU", "NDULA", "NDULU", "EDUCA"])
        {
            self.metaph_add_exact_approx_alt("J", "D", "J", "T");
            self.advance_counter(1, 0);
            return true;
        }

        false
    }

    fn encode_dous(&mut self) -> bool {
        // e.g. "assiduous", "arduous"
        if self.string_at(1, &["UOUS"]) {
            self.metaph_add_exact_approx_alt("J", "D", "J", "T");
            self.advance_counter(3, 0);
            return true;
        }

        false
    }

    fn encode_silent_d(&mut self) -> bool {
        // silent 'D' e.g. 'wednesday', 'handsome'
        self.string_at(-2, &["WEDNESDAY"])
            || self.string_at(-3, &["HANDKER", "HANDSOM", "WINDSOR"])
            // french silent D at end in words or names familiar to americans
            || self.string_end(&["PERNOD", "ARTAUD", "RENAUD", "RIMBAUD", "MICHAUD", "BICHAUD"])
    }

    //////////////////////////////////////////////////////////////////////////
    // 'F'
    //////////////////////////////////////////////////////////////////////////

    fn encode_f(&mut self) {
        // "-FT-" where the 'T' is usually silent, e.g. 'often', 'soften'
        if self.string_at(-1, &["OFTEN"]) {
            self.metaph_add_str("F", "FT");
            self.idx += 1;
            return;
        }

        // eat redundant 'F'
        if self.char_next_is('F') {
            self.idx += 1;
        }
        self.metaph_add('F');
    }

    //////////////////////////////////////////////////////////////////////////
    // 'G'
    //////////////////////////////////////////////////////////////////////////

    fn encode_g(&mut self) {
        if !self.string_at(-1, &["C", "K", "G", "Q"]) {
            self.metaph_add_exact_approx("G", "K");
        }
    }

    //////////////////////////////////////////////////////////////////////////
    // 'H'
    //////////////////////////////////////////////////////////////////////////

    fn encode_h(&mut self) {
        if self.encode_initial_silent_h()
            || self.encode_initial_hs()
            || self.encode_initial_hu_hw()
            || self.encode_non_initial_silent_h()
        {
            return;
        }

        // only keep if first & before vowel or btw. 2 vowels
        self.encode_h_pronounced();
    }

    fn encode_initial_silent_h(&mut self) -> bool {
        // 'hour', 'herb', 'heir', 'honor'
        if self.string_at(1, &["OUR", "ERB", "EIR", "ONOR", "ONOUR", "ONEST"]) {
            // british pronounce the H in this word, americans give it 'H' for
            // the name, no 'H' for the plant
            if self.string_at_start(0, &["HERB"]) {
                if self.vowels {
                    self.metaph_add_str("HA", "A");
                } else {
                    self.metaph_add_alt(Some('H'), Some('A'));
                }
            } else if self.idx == 0 || self.vowels {
                self.metaph_add('A');
            }

            // don't encode vowels twice
            self.idx = self.skip_vowels(self.idx + 1);
            return true;
        }

        false
    }

    fn encode_initial_hs(&mut self) -> bool {
        // old chinese pinyin transliteration, e.g. 'HSIAO'
        if self.string_at_start(0, &["HS"]) {
            self.metaph_add('X');
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_initial_hu_hw(&mut self) -> bool {
        // spanish spellings and chinese pinyin transliteration
        if self.string_start(&["HUA", "HUE", "HWA"]) && !self.string_at(0, &["HUEY"]) {
            self.metaph_add('A');

            if !self.vowels {
                self.idx += 2;
            } else {
                self.idx += 1;
                // don't encode vowels twice
                while self.is_vowel_at(0) || self.char_at(0, 'W') {
                    self.idx += 1;
                }
                // give back one that's going to be added in the main loop
                self.idx -= 1;
            }
            return true;
        }

        false
    }

    fn encode_non_initial_silent_h(&mut self) -> bool {
        if self.string_at(
            -2,
            &[
                "NIHIL", "VEHEM", "LOHEN", "NEHEM", "MAHON", "MAHAN", "COHEN", "GAHAN",
            ],
        ) || self.string_at(-3, &["TOUHY", "GRAHAM", "PROHIB", "FRAHER", "TOOHEY", "TOUHEY"])
            || self.string_start(&["CHIHUAHUA"])
        {
            if self.vowels {
                self.idx += 1;
            } else {
                self.idx = self.skip_vowels(self.idx + 1);
            }
            return true;
        }

        false
    }

    fn encode_h_pronounced(&mut self) -> bool {
        if ((self.idx == 0 || self.is_vowel_at(-1) || (self.idx > 0 && self.char_at(-1, 'W')))
            && self.is_vowel_at(1))
            // e.g. 'alWahhab'
            || (self.char_next_is('H') && self.is_vowel_at(2))
        {
            self.metaph_add('H');
            self.advance_counter(1, 0);
            return true;
        }

        false
    }

    //////////////////////////////////////////////////////////////////////////
    // 'J'
    //////////////////////////////////////////////////////////////////////////

    fn encode_j(&mut self) {
        if self.encode_spanish_j() || self.encode_spanish_oj_uj() {
            return;
        }

        if self.idx == 0 {
            if self.encode_german_j() {
                return;
            }
            if self.encode_j_to_j() {
                return;
            }
        } else {
            if self.encode_spanish_j2() {
                return;
            } else if !self.encode_j_as_vowel() {
                self.metaph_add('J');
            }

            // it could happen! e.g. "hajj"
            // eat redundant 'J'
            if self.char_next_is('J') {
                self.idx += 1;
            }
        }
    }

    fn encode_spanish_j(&mut self) -> bool {
        // obvious spanish, e.g. "jose", "san jacinto"
        if (self.string_at(1, &["UAN", "ACI", "ALI", "EFE", "ICA", "IME", "OAQ", "UAR"])
            && !self.string_at(0, &["JIMERSON", "JIMERSEN"]))
            || self.string_at_end(1, &["OSE"])
            || self.string_at(1, &["EREZ", "UNTA", "AIME", "AVIE", "AVIA", "IMINEZ", "ARAMIL"])
            || self.string_at_end(-2, &["MEJIA"])
            || self.string_at(
                -2,
                &[
                    "TEJED", "TEJAD", "LUJAN", "FAJAR", "BEJAR", "BOJOR", "CAJIG", "DEJAS",
                    "DUJAR", "DUJAN", "MIJAR", "MEJOR", "NAJAR", "NOJOS", "RAJED", "RIJAL",
                    "REJON", "TEJAN", "UIJAN",
                ],
            )
            || self.string_at(-3, &["ALEJANDR", "GUAJARDO", "TRUJILLO"])
            || (self.string_at(-2, &["RAJAS"]) && self.idx > 2)
            || (self.string_at(-2, &["MEJIA"]) && !self.string_at(-2, &["MEJIAN"]))
            || self.string_at(-1, &["OJEDA"])
            || self.string_at(-3, &["LEIJA", "MINJA", "VIAJES", "GRAJAL"])
            || self.string_at(0, &["JAUREGUI"])
            || self.string_at(-4, &["HINOJOSA"])
            || self.string_start(&["SAN "])
            || ((self.idx + 1 == self.last)
                && self.char_at(1, 'O')
                && !self.string_start(&["TOJO", "BANJO", "MARYJO"]))
        {
            // americans pronounce "juan" as 'wan', and "marijuana" and
            // "tijuana" also do not get the 'H' as in spanish, so just treat
            // it like a vowel in these cases
            if !(self.string_at(0, &["JUAN"]) || self.string_at(0, &["JOAQ"])) {
                self.metaph_add('H');
            } else if self.idx == 0 {
                self.metaph_add('A');
            }
            self.advance_counter(1, 0);
            return true;
        }

        // Jorge gets 2nd HARHA. also JULIO, JESUS
        if self.string_at(1, &["ORGE", "ULIO", "ESUS"]) && !self.string_start(&["JORGEN"]) {
            // get both consonants for "jorge"
            if self.string_at_end(1, &["ORGE"]) {
                if self.vowels {
                    self.metaph_add_str("JARJ", "HARHA");
                } else {
                    self.metaph_add_str("JRJ", "HRH");
                }
                self.advance_counter(4, 4);
                return true;
            }
            self.metaph_add_alt(Some('J'), Some('H'));
            self.advance_counter(1, 0);
            return true;
        }

        false
    }

    fn encode_german_j(&mut self) -> bool {
        if self.string_at(1, &["AH", "UGO"])
            || self.string_exact(&["JOHANN"])
            || (self.string_at(1, &["UNG"]) && !self.char_at(4, 'L'))
        {
            self.metaph_add('A');
            self.advance_counter(1, 0);
            return true;
        }

        false
    }

    fn encode_spanish_oj_uj(&mut self) -> bool {
        if self.string_at(1, &["OJOBA", "UJUY"]) {
            if self.vowels {
                self.metaph_add_str("HAH", "HAH");
            } else {
                self.metaph_add_str("HH", "HH");
            }

            self.advance_counter(3, 2);
            return true;
        }

        false
    }

    fn encode_j_to_j(&mut self) -> bool {
        if self.is_vowel_at(1) {
            if self.idx == 0 && self.string_start(J_NAMES_PRONOUNCED_Y) {
                // 'Y' is a vowel so encode it as 'A'
                if self.vowels {
                    self.metaph_add_str("JA", "A");
                } else {
                    self.metaph_add_alt(Some('J'), Some('A'));
                }
            } else if self.vowels {
                self.metaph_add_str("JA", "JA");
            } else {
                self.metaph_add('J');
            }
            self.idx = self.skip_vowels(self.idx + 1);
            return false;
        }

        self.metaph_add('J');
        true
    }

    fn encode_spanish_j2(&mut self) -> bool {
        // spanish forms e.g. "brujo", "badajoz"
        if self.string_at_start(-2, &["BOJA", "BAJA", "BEJA", "BOJO", "MOJA", "MOJI", "MEJI"])
            || self.string_at_start(
                -3,
                &["FRIJO", "BRUJO", "BRUJA", "GRAJE", "GRIJA", "LEIJA", "QUIJA"],
            )
            || (self.string_at_end(
                -1,
                &[
                    "OJA", "EJA", "AJOS", "EJOS", "OJAS", "OJOS", "UJON", "AJOZ", "AJAL", "UJAR",
                    "EJON", "EJAN", "AJARA",
                ],
            ) && !self.string_start(&["DEJA"]))
        {
            self.metaph_add('H');
            self.advance_counter(1, 0);
            return true;
        }

        false
    }

    fn encode_j_as_vowel(&mut self) -> bool {
        if self.string_at(0, &["JEWSK"]) {
            self.metaph_add_alt(Some('J'), None);
            return true;
        }

        // e.g. "stijl", "sejm" - dutch, scandinavian, and eastern european
        // spellings, except words from hindi and arabic
        (self.string_at(1, &["L", "T", "K", "S", "N", "M"]) && !self.string_at(2, &["A"]))
            || self.string_start(&["FJ", "WOJ", "LJUB", "BJOR", "HAJEK", "HALLELUJA", "LJUBLJANA"])
            // e.g. 'rekjavik', 'blagojevic'
            || self.string_at(0, &["JAVIK", "JEVIC"])
            || self.string_exact(&["SONJA", "TANJA", "TONJA"])
    }

    //////////////////////////////////////////////////////////////////////////
    // 'K'
    //////////////////////////////////////////////////////////////////////////

    fn encode_k(&mut self) {
        if !self.encode_silent_k() {
            self.metaph_add('K');

            // eat redundant K's and Q's
            if self.char_at(1, 'K') || self.char_at(1, 'Q') {
                self.idx += 1;
            }
        }
    }

    fn encode_silent_k(&mut self) -> bool {
        if self.idx == 0
            && self.string_start(&["KN"])
            && !self.string_at(2, &["ISH", "ESSET", "IEVEL"])
        {
            return true;
        }

        // e.g. "know", "knit", "knob"
        if (self.string_at(1, &["NOW", "NIT", "NOT", "NOB"]) && !self.string_start(&["BANKNOTE"]))
            || self.string_at(1, &["NOCK", "NUCK", "NIFE", "NACK", "NIGHT"])
        {
            // N already encoded before, e.g. "penknife"
            if self.idx > 0 && self.char_at(-1, 'N') {
                self.idx += 1;
            }

            return true;
        }

        false
    }

    //////////////////////////////////////////////////////////////////////////
    // 'L'
    //////////////////////////////////////////////////////////////////////////

    fn encode_l(&mut self) {
        // logic below needs the position of the 'L' before the cursor moves
        let save_idx = self.idx;

        self.interpolate_vowel_when_cons_l_at_end();

        if self.encode_lely_to_l()
            || self.encode_colonel()
            || self.encode_french_ault()
            || self.encode_french_euil()
            || self.encode_french_oulx()
            || self.encode_silent_l_in_lm()
            || self.encode_silent_l_in_lk_lv()
            || self.encode_silent_l_in_ould()
        {
            return;
        }

        if self.encode_ll_as_vowel_cases() {
            return;
        }

        self.encode_le_cases(save_idx);
    }

    /// An L following D, G, or T at the end has a schwa pronounced before it.
    fn interpolate_vowel_when_cons_l_at_end(&mut self) {
        // e.g. "ertl", "vogl"
        if self.vowels && self.string_at_end(-1, &["DL", "GL", "TL"]) {
            self.metaph_add('A');
        }
    }

    fn encode_lely_to_l(&mut self) -> bool {
        // e.g. "agilely", "docilely"
        if self.string_at_end(-1, &["ILELY"]) {
            self.metaph_add('L');
            self.idx += 2;
            return true;
        }

        false
    }

    fn encode_colonel(&mut self) -> bool {
        if self.string_at(-2, &["COLONEL"]) {
            self.metaph_add('R');
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_french_ault(&mut self) -> bool {
        // e.g. "renault" and "foucault", well known to americans, but not
        // "fault"
        if self.idx > 3
            && (self.string_at(-3, &["RAULT", "NAULT", "BAULT", "SAULT", "GAULT", "CAULT"])
                || self.string_at(-4, &["REAULT", "RIAULT", "NEAULT", "BEAULT"]))
            && !(root_or_inflections(&self.input, "ASSAULT")
                || self.string_at(-8, &["SOMERSAULT"])
                || self.string_at(-9, &["SUMMERSAULT"]))
        {
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_french_euil(&mut self) -> bool {
        // e.g. "auteuil"
        self.string_at_end(-3, &["EUIL"])
    }

    fn encode_french_oulx(&mut self) -> bool {
        // e.g. "proulx"
        if self.string_at_end(-2, &["OULX"]) {
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_silent_l_in_lm(&mut self) -> bool {
        if self.string_at(0, &["LM", "LN"]) {
            // e.g. "lincoln", "holmes", "psalm", "salmon"
            let silent = (self.string_at(-2, &["COLN", "CALM", "BALM", "MALM", "PALM"])
                || self.string_at_end(-1, &["OLM"])
                || self.string_at(-3, &["PSALM", "QUALM"])
                || self.string_at(-2, &["SALMON", "HOLMES"])
                || self.string_at(-1, &["ALMOND"])
                || self.string_at_start(-1, &["ALMS"]))
                && (!self.string_at(2, &["A"])
                    && !self.string_at(-2, &["BALMO", "PALMER", "PALMOR", "BALMER"])
                    && !self.string_at(-3, &["THALM"]));

            if !silent {
                self.metaph_add('L');
            }

            return true;
        }

        false
    }

    fn encode_silent_l_in_lk_lv(&mut self) -> bool {
        (self.string_at(-2, &["WALK", "YOLK", "FOLK", "HALF", "TALK", "CALF", "BALK", "CALK"])
            || (self.string_at(-2, &["POLK", "HALV", "SALVE", "CALVE", "SOLDER"])
                && !self.string_at(-2, &["POLKA", "PALKO", "HALVA", "HALVO", "SALVER", "CALVER"]))
            || (self.string_at(-3, &["CAULK", "CHALK", "BAULK", "FAULK"])
                && !self.string_at(-4, &["SCHALK"])))
            && !self.string_at(-5, &["GONSALVES", "GONCALVES"])
            && !self.string_at(-2, &["BALKAN", "TALKAL"])
            && !self.string_at(-3, &["PAULK", "CHALF"])
    }

    fn encode_silent_l_in_ould(&mut self) -> bool {
        // 'would', 'could'
        if self.string_at(-3, &["WOULD", "COULD"])
            || (self.string_at(-4, &["SHOULD"]) && !self.string_at(-4, &["SHOULDER"]))
        {
            self.metaph_add_exact_approx("D", "T");
            self.idx += 1;
            return true;
        }

        false
    }

    /// "-ILLA-" and "-ILLE-" in spanish and french contexts where americans
    /// know to pronounce it as a 'Y'.
    fn encode_ll_as_vowel_special_cases(&mut self) -> bool {
        if self.string_at(-5, &["TORTILLA"])
            || self.string_at(-8, &["RATATOUILLE"])
            // e.g. 'guillermo', "veillard"
            // 'guillotine' usually has '-ll-' pronounced as 'L' in english
            || (self.string_start(&["GUILL", "VEILL", "GAILL"])
                && !(self.string_at(-3, &["GUILLOT", "GUILLOR", "GUILLEN"])
                    || self.string_exact(&["GUILL"])))
            // e.g. "brouillard", "gremillion"
            || self.string_start(&["ROBILL", "BROUILL", "GREMILL"])
            // e.g. 'mireille'
            // exception "reveille" usually pronounced as 're-vil-lee'
            || (self.string_at_end(-2, &["EILLE"]) && !self.string_at(-5, &["REVEILLE"]))
        {
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_ll_as_vowel(&mut self) -> bool {
        // spanish e.g. "cabrillo", "gallegos" but also "gorilla",
        // "ballerina" - give both pronunciations since an american might
        // pronounce "cabrillo" in the spanish or the american fashion
        if self.string_at_end(-1, &["ILLO", "ILLA", "ALLE"])
            || (self.string_end(&["A", "O", "AS", "OS"])
                && self.string_at(-1, &["AL", "IL"])
                && !self.string_at(-1, &["ALLA"]))
            || self.string_start(&[
                "LLA", "VILLE", "VILLA", "GALLARDO", "VALLADAR", "MAGALLAN", "CAVALLAR",
                "BALLASTE",
            ])
        {
            self.metaph_add_alt(Some('L'), None);
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_ll_as_vowel_cases(&mut self) -> bool {
        if self.char_next_is('L') {
            if self.encode_ll_as_vowel_special_cases() {
                return true;
            } else if self.encode_ll_as_vowel() {
                return true;
            }
            self.idx += 1;
        }

        false
    }

    fn encode_vowel_le_transposition(&mut self, idx: usize) -> bool {
        // transposition of vowel sound and L occurs in many words,
        // e.g. "bristle", "dazzle", "goggle" => KAKAL
        let offset = self.idx as isize - idx as isize;

        if self.vowels
            && idx > 1
            && !self.is_vowel_at(offset - 1)
            && self.char_at(offset + 1, 'E')
            && !self.char_at(offset - 1, 'L')
            && !self.char_at(offset - 1, 'R')
            // lots of exceptions to this:
            && !self.is_vowel_at(offset + 2)
            && !self.string_start(&[
                "MCCLE", "MCLEL", "EMBLEM", "KADLEC", "ECCLESI", "COMPLEC", "COMPLEJ", "ROBLEDO",
            ])
            && !(idx + 2 == self.last && self.string_at(offset, &["LET"]))
            && !self.string_at(
                offset,
                &[
                    "LEG", "LER", "LEX", "LESS", "LESQ", "LECT", "LEDG", "LETE", "LETH", "LETS",
                    "LETT", "LETUS", "LETIV", "LETELY", "LETTER", "LETION", "LETIAN", "LETING",
                    "LETORY", "LETTING",
                ],
            )
            // e.g. "complement" !=> KAMPALMENT
            && !(self.string_at(offset, &["LEMENT"])
                && !(self.string_at(-5, &["BATTLE", "TANGLE", "PUZZLE", "RABBLE", "BABBLE"])
                    || self.string_at(-4, &["TABLE"])))
            && !(idx + 2 == self.last && self.string_at(offset - 2, &["OCLES", "ACLES", "AKLES"]))
            && !self.string_at(offset - 3, &["LISLE", "AISLE"])
            && !self.string_start(&["ISLE"])
            && !self.string_start(&["ROBLES"])
            && !self.string_at(offset - 4, &["PROBLEM", "RESPLEN"])
            && !self.string_at(offset - 3, &["REPLEN"])
            && !self.string_at(offset - 2, &["SPLE"])
            && !self.char_at(offset - 1, 'H')
            && !self.char_at(offset - 1, 'W')
        {
            self.metaph_add_str("AL", "AL");
            self.flag_al_inversion = true;

            // eat redundant 'L'
            if self.char_at(offset + 2, 'L') {
                self.idx = idx + 2;
            }
            return true;
        }

        false
    }

    fn encode_vowel_preserve_vowel_after_l(&mut self, idx: usize) -> bool {
        let offset = idx as isize - self.idx as isize;

        if self.vowels
            && !self.is_vowel_at(offset - 1)
            && self.char_at(offset + 1, 'E')
            && idx > 1
            && idx + 1 != self.last
            && !(self.string_at(offset + 1, &["ES", "ED"]) && idx + 2 == self.last)
            && !self.string_at(offset - 1, &["RLEST"])
        {
            self.metaph_add_str("LA", "LA");
            self.idx = self.skip_vowels(self.idx + 1);
            return true;
        }

        false
    }

    fn encode_le_cases(&mut self, idx: usize) {
        if self.encode_vowel_le_transposition(idx) {
            return;
        }

        if self.encode_vowel_preserve_vowel_after_l(idx) {
            return;
        }

        self.metaph_add('L');
    }

    //////////////////////////////////////////////////////////////////////////
    // 'M'
    //////////////////////////////////////////////////////////////////////////

    fn encode_m(&mut self) {
        if self.encode_silent_m_at_beginning()
            || self.encode_mr_and_mrs()
            || self.encode_mac()
            || self.encode_mpt()
        {
            return;
        }

        self.encode_mb();

        self.metaph_add('M');
    }

    fn encode_silent_m_at_beginning(&mut self) -> bool {
        self.string_at_start(0, &["MN"])
    }

    fn encode_mr_and_mrs(&mut self) -> bool {
        if self.string_exact(&["MR"]) {
            if self.vowels {
                self.metaph_add_str("MASTAR", "MASTAR");
            } else {
                self.metaph_add_str("MSTR", "MSTR");
            }
            self.idx += 1;
            return true;
        } else if self.string_exact(&["MRS"]) {
            if self.vowels {
                self.metaph_add_str("MASAS", "MASAS");
            } else {
                self.metaph_add_str("MSS", "MSS");
            }
            self.idx += 2;
            return true;
        }

        false
    }

    fn encode_mac(&mut self) -> bool {
        // should only find irish and scottish names e.g. 'macintosh'
        if self.string_at_start(
            0,
            &["MC", "MACIVER", "MACEWEN", "MACELROY", "MACILROY", "MACINTOSH"],
        ) {
            if self.vowels {
                self.metaph_add_str("MAK", "MAK");
            } else {
                self.metaph_add_str("MK", "MK");
            }

            if self.string_start(&["MC"]) {
                // watch out for e.g. "McGeorge"
                if self.string_at(2, &["K", "G", "Q"]) && !self.string_at(2, &["GEOR"]) {
                    self.idx += 2;
                } else {
                    self.idx += 1;
                }
            } else {
                self.idx += 2;
            }

            return true;
        }

        false
    }

    fn encode_mpt(&mut self) -> bool {
        if self.string_at(-2, &["COMPTROL"]) || self.string_at(-4, &["ACCOMPT"]) {
            self.metaph_add('N');
            self.idx += 1;
            return true;
        }

        false
    }

    fn test_silent_mb1(&self) -> bool {
        // e.g. "LAMB", "COMB", "LIMB", "DUMB", "BOMB"
        // handle combining roots first
        self.string_at_start(-3, &["THUMB"])
            || self.string_at_start(-2, &["DUMB", "BOMB", "DAMN", "LAMB", "NUMB", "TOMB"])
    }

    fn test_pronounced_mb(&self) -> bool {
        self.string_at(-2, &["NUMBER"])
            || (self.string_at(2, &["A", "O"]) && !self.string_at(-2, &["DUMBASS"]))
            || self.string_at(-2, &["LAMBEN", "LAMBER", "LAMBET", "TOMBIG", "LAMBRE"])
    }

    fn test_silent_mb2(&self) -> bool {
        // 'M' is the current letter
        self.char_next_is('B')
            && self.idx > 1
            && (self.idx + 1 == self.last
                // other situations where "-MB-" is at the end of a root but
                // not at the end of the word. The tests are for standard noun
                // suffixes, e.g. "climbing" => KLMNK
                || self.string_at(2, &["ING", "ABL", "LIKE"])
                || self.string_at_end(2, &["S"])
                || self.string_at(-5, &["BUNCOMB"])
                // e.g. "bomber"
                || (self.string_at_end(2, &["ED", "ER"])
                    && (self.string_start(&["CLIMB", "PLUMB"])
                        || !self.string_at(-1, &["IMBER", "AMBER", "EMBER", "UMBER"]))
                    && !self.string_at(-2, &["CUMBER", "SOMBER"])))
    }

    fn test_pronounced_mb2(&self) -> bool {
        // e.g. "bombastic", "umbrage", "flamboyant"
        self.string_at(-1, &["OMBAS", "OMBAD", "UMBRA"]) || self.string_at(-3, &["FLAM"])
    }

    fn test_mn(&self) -> bool {
        self.char_next_is('N')
            && (self.idx + 1 == self.last
                // or at the end of a word but followed by suffixes
                || self.string_at_end(2, &["S", "LY", "ER", "ED", "ING", "EST"])
                || self.string_at(-2, &["DAMNEDEST"])
                || self.string_at(-5, &["GODDAMNIT"]))
    }

    fn encode_mb(&mut self) {
        if self.test_silent_mb1() {
            if !self.test_pronounced_mb() {
                self.idx += 1;
            }
        } else if self.test_silent_mb2() {
            if !self.test_pronounced_mb2() {
                self.idx += 1;
            }
        } else if self.test_mn() || self.char_next_is('M') {
            self.idx += 1;
        }
    }

    //////////////////////////////////////////////////////////////////////////
    // 'N'
    //////////////////////////////////////////////////////////////////////////

    fn encode_n(&mut self) {
        if self.encode_nce() {
            return;
        }

        // eat redundant 'N'
        if self.char_next_is('N') {
            self.idx += 1;
        }

        // e.g. "aloneness"
        if !self.string_at(-3, &["MONSIEUR"]) && !self.string_at(-3, &["NENESS"]) {
            self.metaph_add('N');
        }
    }

    /// "-NCE-" and "-NSE-" : "entrance" is pronounced exactly the same as
    /// "entrants".
    fn encode_nce(&mut self) -> bool {
        // 'acceptance', 'accountancy'
        if self.string_at(1, &["C", "S"])
            && self.string_at(2, &["E", "Y", "I"])
            && (self.idx + 2 == self.last || (self.idx + 3 == self.last && self.char_at(3, 'S')))
        {
            self.metaph_add_str("NTS", "NTS");
            self.idx += 1;
            return true;
        }

        false
    }

    //////////////////////////////////////////////////////////////////////////
    // 'P'
    //////////////////////////////////////////////////////////////////////////

    fn encode_p(&mut self) {
        if self.encode_silent_p_at_beginning()
            || self.encode_pt()
            || self.encode_ph()
            || self.encode_pph()
            || self.encode_rps()
            || self.encode_coup()
            || self.encode_pneum()
            || self.encode_psych()
            || self.encode_psalm()
        {
            return;
        }

        self.encode_pb();

        self.metaph_add('P');
    }

    fn encode_silent_p_at_beginning(&mut self) -> bool {
        self.string_at_start(0, &["PN", "PF", "PS", "PT"])
    }

    fn encode_pt(&mut self) -> bool {
        // 'pterodactyl', 'receipt', 'asymptote'
        if self.char_next_is('T')
            && (self.string_at_start(0, &["PTERO"])
                || self.string_at(-5, &["RECEIPT"])
                || self.string_at(-4, &["ASYMPTOT"]))
        {
            self.metaph_add('T');
            self.idx += 1;
            return true;
        }

        false
    }

    /// "-PH-", usually F, with exceptions for cases where it is silent, or
    /// where the 'P' and 'H' are pronounced separately because they belong to
    /// two different words in a combining form.
    fn encode_ph(&mut self) -> bool {
        if self.char_next_is('H') {
            // 'PH' silent in these contexts
            if self.string_at(0, &["PHTHALEIN"])
                || self.string_at_start(0, &["PHTH"])
                || self.string_at(-3, &["APOPHTHEGM"])
            {
                self.metaph_add('0');
                self.idx += 3;
            } else if self.idx > 0
                && (self.string_at(
                    2,
                    &[
                        "AM", "EAD", "OLE", "ELD", "ILL", "OLD", "EAP", "ERD", "ARD", "ANG",
                        "ORN", "EAV", "ART", "OUSE", "AMMER", "AZARD", "UGGER", "OLSTER",
                    ],
                ) && !self.string_at(-1, &["LPHAM"]))
                && !self.string_at(-3, &["LYMPH", "NYMPH"])
            {
                // combining forms, 'sheepherd', 'upheaval', 'cupholder'
                self.metaph_add('P');
                self.advance_counter(2, 1);
            } else {
                self.metaph_add('F');
                self.idx += 1;
            }

            return true;
        }

        false
    }

    fn encode_pph(&mut self) -> bool {
        // 'sappho'
        if self.char_next_is('P') && self.idx + 2 < self.input.len() && self.char_at(2, 'H') {
            self.metaph_add('F');
            self.idx += 2;
            return true;
        }

        false
    }

    fn encode_rps(&mut self) -> bool {
        // '-corps-', 'corpsman'
        if self.string_at(-3, &["CORPS"]) && !self.string_at(-3, &["CORPSE"]) {
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_coup(&mut self) -> bool {
        // 'coup'
        self.string_at_end(-3, &["COUP"]) && !self.string_at(-5, &["RECOUP"])
    }

    fn encode_pneum(&mut self) -> bool {
        // '-pneum-'
        if self.string_at(1, &["NEUM"]) {
            self.metaph_add('N');
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_psych(&mut self) -> bool {
        // '-psych-'
        if self.string_at(1, &["SYCH"]) {
            if self.vowels {
                self.metaph_add_str("SAK", "SAK");
            } else {
                self.metaph_add_str("SK", "SK");
            }
            self.idx += 4;
            return true;
        }

        false
    }

    fn encode_psalm(&mut self) -> bool {
        if self.string_at(1, &["SALM"]) {
            if self.vowels {
                self.metaph_add_str("SAM", "SAM");
            } else {
                self.metaph_add_str("SM", "SM");
            }
            self.idx += 4;
            return true;
        }

        false
    }

    fn encode_pb(&mut self) {
        // e.g. "campbell", "raspberry"
        // eat redundant 'P' or 'B'
        if self.string_at(1, &["P", "B"]) {
            self.idx += 1;
        }
    }

    //////////////////////////////////////////////////////////////////////////
    // 'Q'
    //////////////////////////////////////////////////////////////////////////

    fn encode_q(&mut self) {
        // current pinyin
        if self.string_at(0, &["QIN"]) {
            self.metaph_add('X');
            return;
        }

        // eat redundant 'Q'
        if self.char_next_is('Q') {
            self.idx += 1;
        }
        self.metaph_add('K');
    }

    //////////////////////////////////////////////////////////////////////////
    // 'R'
    //////////////////////////////////////////////////////////////////////////

    fn encode_r(&mut self) {
        if self.encode_rz() {
            return;
        }

        if !self.test_silent_r() && !self.encode_vowel_re_transposition() {
            self.metaph_add('R');
        }

        // eat redundant 'R'; also skip 'S' as well as 'R' in "poitiers"
        if self.char_next_is('R') || self.string_at(-6, &["POITIERS"]) {
            self.idx += 1;
        }
    }

    /// "-RZ-" according to american and polish pronunciations.
    fn encode_rz(&mut self) -> bool {
        if self.string_at(-2, &["GARZ", "KURZ", "MARZ", "MERZ", "HERZ", "PERZ", "WARZ"])
            || self.string_at(0, &["RZANO", "RZOLA"])
            || self.string_at(-1, &["ARZA", "ARZN"])
        {
            return false;
        }

        // 'yastrzemski' usually has 'z' silent in
        // united states, but should get 'X' in poland
        if self.string_at(-4, &["YASTRZEMSKI"]) {
            self.metaph_add_alt(Some('R'), Some('X'));
            self.idx += 1;
            return true;
        }

        // 'BRZEZINSKI' gets two pronunciations
        // in the united states, neither of which
        // are authentically polish
        if self.string_at(-1, &["BRZEZINSKI"]) {
            self.metaph_add_str("RS", "RJ");
            // skip of 2nd Z
            self.idx += 3;
            return true;
        }

        // 'z' in 'rz after voiceless consonant gets 'X'
        // in alternate polish style pronunciation
        if self.string_at(-1, &["TRZ", "PRZ", "KRZ"])
            || (self.string_at(0, &["RZ"]) && (self.is_vowel_at(-1) || self.idx == 0))
        {
            self.metaph_add_str("RS", "X");
            self.idx += 1;
            return true;
        }

        // 'z' in 'rz after voiced consonant, vowel, or at
        // beginning gets 'J' in alternate polish style pronunciation
        if self.string_at(-1, &["BRZ", "DRZ", "GRZ"]) {
            self.metaph_add_str("RS", "J");
            self.idx += 1;
            return true;
        }

        false
    }

    /// Cases where 'R' is silent, either because the word is from the french
    /// or because it is no longer pronounced, e.g. "rogier", "monsieur".
    fn test_silent_r(&self) -> bool {
        (self.idx == self.last
            && self.string_at(-2, &["IER"])
            // e.g. "metier"
            && (self.string_at(-5, &["MET", "VIV", "LUC"])
                // e.g. "cartier", "bustier"
                || self.string_at(
                    -6,
                    &[
                        "CART", "DOSS", "FOUR", "OLIV", "BUST", "DAUM", "ATEL", "SONN", "CORM",
                        "MERC", "PELT", "POIR", "BERN", "FORT", "GREN", "SAUC", "GAGN", "GAUT",
                        "GRAN", "FORC", "MESS", "LUSS", "MEUN", "POTH", "HOLL", "CHEN",
                    ],
                )
                // e.g. "croupier"
                || self.string_at(
                    -7,
                    &["CROUP", "TORCH", "CLOUT", "FOURN", "GAUTH", "TROTT", "DEROS", "CHART"],
                )
                // e.g. "chevalier"
                || self.string_at(
                    -8,
                    &["CHEVAL", "LAVOIS", "PELLET", "SOMMEL", "TREPAN", "LETELL", "COLOMB"],
                )
                || self.string_at(-9, &["CHARCUT"])
                || self.string_at(-10, &["CHARPENT"])))
            || self.string_at(-2, &["SURBURB", "WORSTED", "WORCESTER"])
            || self.string_at(-7, &["MONSIEUR"])
            || self.string_at(-6, &["POITIERS"])
    }

    /// '-re-' as 'AR' in contexts where this is the correct pronunciation.
    fn encode_vowel_re_transposition(&mut self) -> bool {
        // -re inversion is just like -le inversion
        // e.g. "fibre" => FABAR or "centre" => SANTAR
        if self.vowels
            && self.char_next_is('E')
            && self.input.len() > 3
            && !self.string_start(&["OUTRE", "LIBRE", "ANDRE"])
            && !self.string_exact(&["FRED", "TRES"])
            && !self.string_at(
                -2,
                &["LDRED", "LFRED", "NDRED", "NFRED", "NDRES", "TRES", "IFRED"],
            )
            && !self.is_vowel_at(-1)
            && (self.idx + 1 == self.last || self.string_at_end(2, &["D", "S"]))
        {
            self.metaph_add_str("AR", "AR");
            return true;
        }

        false
    }

    //////////////////////////////////////////////////////////////////////////
    // 'S'
    //////////////////////////////////////////////////////////////////////////

    fn encode_s(&mut self) {
        if self.encode_skj()
            || self.encode_special_sw()
            || self.encode_sj()
            || self.encode_silent_french_s_final()
            || self.encode_silent_french_s_internal()
            || self.encode_isl()
            || self.encode_stl()
            || self.encode_christmas()
            || self.encode_sthm()
            || self.encode_isten()
            || self.encode_sugar()
            || self.encode_sh()
            || self.encode_sch()
            || self.encode_sur()
            || self.encode_su()
            || self.encode_ssio()
            || self.encode_ss()
            || self.encode_sia()
            || self.encode_sio()
            || self.encode_anglicisations()
            || self.encode_sc()
            || self.encode_sei_sui_sier()
            || self.encode_sea()
        {
            return;
        }

        self.metaph_add('S');

        if self.string_at(1, &["S", "Z"]) && !self.string_at(1, &["SH"]) {
            self.idx += 1;
        }
    }

    fn encode_skj(&mut self) -> bool {
        // scandinavian
        if self.string_at(0, &["SKJO", "SKJU"]) && self.is_vowel_at(3) {
            self.metaph_add('X');
            self.idx += 2;
            return true;
        }

        false
    }

    fn encode_special_sw(&mut self) -> bool {
        if self.idx == 0 {
            if self.string_start(SW_NAMES_ALT_SV) {
                self.metaph_add_str("S", "SV");
                self.idx += 1;
                return true;
            }

            if self.string_start(SW_NAMES_ALT_XV) {
                self.metaph_add_str("S", "XV");
                self.idx += 1;
                return true;
            }
        }

        false
    }

    fn encode_sj(&mut self) -> bool {
        if self.string_start(&["SJ"]) {
            self.metaph_add('X');
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_silent_french_s_final(&mut self) -> bool {
        // "louis" is an exception because it gets two pronunciations
        if self.string_exact(&["LOUIS"]) {
            self.metaph_add_alt(Some('S'), None);
            return true;
        }

        if self.idx == self.last
            && ((self.string_start(&[
                "YVES",
                "ARKANSAS",
                "FRANCAIS",
                "CRUDITES",
                "BRUYERES",
                "DESCARTES",
                "DESCHUTES",
                "DESCHAMPS",
                "DESROCHES",
                "DESCHENES",
                "RENDEZVOUS",
                "CONTRETEMPS",
                "DESLAURIERS",
            ]) || self.string_exact(&["HORS"])
                || self.string_end(&[
                    "CAMUS", "YPRES", "MESNES", "DEBRIS", "BLANCS", "INGRES", "CANNES",
                    "CHABLIS", "APROPOS", "JACQUES", "ELYSEES", "OEUVRES", "GEORGES",
                    "DESPRES",
                ]))
                || (self.string_at(-2, &["AI", "OI", "UI"])
                    && !self.string_start(&["LOIS", "LUIS"])))
        {
            return true;
        }

        false
    }

    fn encode_silent_french_s_internal(&self) -> bool {
        // french words familiar to americans where internal s is silent
        self.string_at(
            -2,
            &[
                "MESNES", "DESCHAM", "DESPRES", "DESROCH", "DESROSI", "DESJARD", "DESMARA",
                "DESCHEN", "DESHOTE", "DESLAUR", "DESCARTES",
            ],
        ) || self.string_at(-5, &["DUQUESNE", "DUCHESNE"])
            || self.string_at(-3, &["FRESNEL", "GROSVENOR"])
            || self.string_at(-4, &["LOUISVILLE"])
            || self.string_at(-7, &["BEAUCHESNE", "ILLINOISAN"])
    }

    fn encode_isl(&self) -> bool {
        // special cases 'island', 'isle', 'carlisle', 'carlysle'
        (self.string_at(-2, &["LISL", "LYSL", "AISL"])
            && !self.string_at(-3, &["PAISLEY", "BAISLEY", "ALISLAM", "ALISLAH", "ALISLAA"]))
            || (self.idx == 1
                && (self.string_at(-1, &["ISLE", "ISLAN"])
                    && !self.string_at(-1, &["ISLEY", "ISLER"])))
    }

    fn encode_stl(&mut self) -> bool {
        // 'hustle', 'bustle', 'whistle'
        if (self.string_at(0, &["STLE", "STLI"]) && !self.string_at(2, &["LESS", "LIKE", "LINE"]))
            || self.string_at(-3, &["THISTLY", "BRISTLY", "GRISTLY"])
            // e.g. "corpuscle"
            || self.string_at(-1, &["USCLE"])
        {
            // KRISTEN, KRYSTLE, CRYSTLE, KRISTLE all pronounce the 't'
            // also, exceptions where "-LING" is a nominalizing suffix
            if self.string_start(&[
                "KRISTEN",
                "KRYSTLE",
                "CRYSTLE",
                "KRISTLE",
                "CHRISTENSEN",
                "CHRISTENSON",
            ]) || self.string_at(-3, &["FIRSTLING"])
                || self.string_at(-2, &["NESTLING", "WESTLING"])
            {
                self.metaph_add_str("ST", "ST");
                self.idx += 1;
            } else {
                if self.vowels
                    && self.char_at(3, 'E')
                    && !self.char_at(4, 'R')
                    && !self.string_at(3, &["EY", "ETTE", "ETTA"])
                {
                    self.metaph_add_str("SAL", "SAL");
                    self.flag_al_inversion = true;
                } else {
                    self.metaph_add_str("SL", "SL");
                }
                self.idx += 2;
            }
            return true;
        }

        false
    }

    fn encode_christmas(&mut self) -> bool {
        if self.string_at(-4, &["CHRISTMA"]) {
            self.metaph_add_str("SM", "SM");
            self.idx += 2;
            return true;
        }

        false
    }

    fn encode_sthm(&mut self) -> bool {
        // 'asthma', 'isthmus'
        if self.string_at(0, &["STHM"]) {
            self.metaph_add_str("SM", "SM");
            self.idx += 3;
            return true;
        }

        false
    }

    fn encode_isten(&mut self) -> bool {
        // 't' is silent in verb, pronounced in name
        if self.string_start(&["CHRISTEN"]) {
            if root_or_inflections(&self.input, "CHRISTEN")
                || self.string_start(&["CHRISTENDOM"])
            {
                self.metaph_add_str("S", "ST");
            } else {
                self.metaph_add_str("ST", "ST");
            }
            self.idx += 1;
            return true;
        }

        // e.g. 'glisten', 'listen'
        if self.string_at(-2, &["LISTEN", "RISTEN", "HASTEN", "FASTEN", "MUSTNT"])
            || self.string_at(-3, &["MOISTEN"])
        {
            self.metaph_add('S');
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_sugar(&mut self) -> bool {
        if self.string_at(0, &["SUGAR"]) {
            self.metaph_add('X');
            return true;
        }

        false
    }

    fn encode_sh(&mut self) -> bool {
        if self.string_at(0, &["SH"]) {
            // exception
            if self.string_at(-2, &["CASHMERE"]) {
                self.metaph_add('J');
                self.idx += 1;
                return true;
            }

            // combining forms, e.g. 'clotheshorse', 'woodshole'
            if self.idx > 0
                && (self.string_at_end(1, &["HAP"])
                    // e.g. "hartsheim", "dishonor"
                    || self.string_at(
                        1,
                        &[
                            "HEIM", "HOEK", "HOLM", "HOLZ", "HOOD", "HEAD", "HEID", "HAAR",
                            "HORS", "HOLE", "HUND", "HELM", "HAWK", "HILL", "HEART", "HATCH",
                            "HOUSE", "HOUND", "HONOR",
                        ],
                    )
                    // e.g. "mishear"
                    || self.string_at_end(2, &["EAR"])
                    // e.g. "hartshorn"
                    || (self.string_at(2, &["ORN"]) && !self.string_at(-2, &["UNSHORN"]))
                    // e.g. "newshour" but not "bashour", "manshour"
                    || (self.string_at(1, &["HOUR"])
                        && !self.string_start(&["ASHOUR", "BASHOUR", "MANSHOUR"]))
                    // e.g. "dishonest", "grasshopper"
                    || self.string_at(
                        2,
                        &[
                            "ARMON", "ONEST", "ALLOW", "OLDER", "OPPER", "EIMER", "ANDLE",
                            "ONOUR", "ABILLE", "UMANCE", "ABITUA",
                        ],
                    ))
            {
                if !self.string_at(-1, &["S"]) {
                    self.metaph_add('S');
                }
            } else {
                self.metaph_add('X');
            }

            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_sch(&mut self) -> bool {
        // these words were combining forms many centuries ago
        if self.string_at(1, &["CH"]) {
            if self.idx > 0
                // e.g. "mischief", "escheat"
                && (self.string_at(3, &["IEF", "EAT", "ANCE", "ARGE"])
                    || self.string_start(&["ESCHEW"]))
            {
                self.metaph_add('S');
                return true;
            }

            // Schlesinger's rule
            // dutch, danish, italian, greek origin,
            // e.g. "school", "schooner", "schiavone", "schiz-"
            if (self.string_at(3, &["OO", "ER", "EN", "UY", "ED", "EM", "IA", "IZ", "IS", "OL"])
                && !self.string_at(0, &["SCHOLT", "SCHISL", "SCHERR"]))
                || self.string_at(3, &["ISZ"])
                || (self.string_at(-1, &["ESCHAT", "ASCHIN", "ASCHAL", "ISCHAE", "ISCHIA"])
                    && !self.string_at(-2, &["FASCHING"]))
                || self.string_at_end(-1, &["ESCHI"])
                || self.char_at(3, 'Y')
            {
                // e.g. "schermerhorn", "schenker", "schistose"
                if self.string_at(3, &["ER", "EN", "IS"])
                    && (self.idx + 4 == self.last || self.string_at(3, &["ENK", "ENB", "IST"]))
                {
                    self.metaph_add_str("X", "SK");
                } else {
                    self.metaph_add_str("SK", "SK");
                }

                self.idx += 2;
            } else {
                self.metaph_add('X');
                self.idx += 2;
            }

            return true;
        }

        false
    }

    fn encode_sur(&mut self) -> bool {
        // 'erasure', 'usury'
        if self.string_at(1, &["URE", "URA", "URY"]) {
            // 'sure', 'ensure'
            if self.idx == 0 || self.string_at(-1, &["N", "K"]) || self.string_at(-2, &["NO"]) {
                self.metaph_add('X');
            } else {
                self.metaph_add('J');
            }

            self.advance_counter(1, 0);
            return true;
        }

        false
    }

    fn encode_su(&mut self) -> bool {
        // 'sensuous', 'consensual'
        if self.string_at(1, &["UO", "UA"]) && self.idx != 0 {
            // exceptions e.g. "persuade"
            if self.string_at(-1, &["RSUA"]) {
                self.metaph_add('S');
            } else if self.is_vowel_at(-1) {
                // exceptions e.g. "casual"
                self.metaph_add_alt(Some('J'), Some('S'));
            } else {
                self.metaph_add_alt(Some('X'), Some('S'));
            }

            self.advance_counter(2, 0);
            return true;
        }

        false
    }

    fn encode_ssio(&mut self) -> bool {
        if self.string_at(1, &["SION"]) {
            // "abcission"
            if self.string_at(-2, &["CI"]) {
                self.metaph_add('J');
            } else if self.is_vowel_at(-1) {
                // 'mission'
                self.metaph_add('X');
            }

            self.advance_counter(3, 1);
            return true;
        }

        false
    }

    fn encode_ss(&mut self) -> bool {
        // e.g. "russian", "pressure", "hessian", "assurance"
        if self.string_at(
            -1,
            &[
                "USSIA", "ESSUR", "ISSUR", "ISSUE", "ESSIAN", "ASSURE", "ASSURA", "ISSUAB",
                "ISSUAN", "ASSIUS",
            ],
        ) {
            self.metaph_add('X');
            self.advance_counter(2, 1);
            return true;
        }

        false
    }

    fn encode_sia(&mut self) -> bool {
        // e.g. "controversial", also "fuchsia", "ch" is silent
        if self.string_at(-2, &["CHSIA"]) || self.string_at(-1, &["RSIAL"]) {
            self.metaph_add('X');
            self.advance_counter(2, 0);
            return true;
        }

        // names generally get 'X' where terms, e.g. "aphasia" get 'J'
        if (self.string_at_start(-3, &["ALESIA", "ALYSIA", "ALISIA", "STASIA"])
            && !self.string_start(&["ANASTASIA"]))
            || self.string_at(-5, &["THERESIA", "DIONYSIAN"])
        {
            self.metaph_add_alt(Some('X'), Some('S'));
            self.advance_counter(2, 0);
            return true;
        }

        if self.string_at_end(0, &["SIA", "SIAN"]) || self.string_at(-5, &["AMBROSIAL"]) {
            if (self.is_vowel_at(-1) || self.string_at(-1, &["R"]))
                // exclude compounds based on names, or french or greek words
                && !(self.string_start(&[
                    "JAMES", "NICOS", "PEGAS", "PEPYS", "HOBBES", "HOLMES", "JAQUES",
                    "KEYNES", "MALTHUS", "HOMOOUS", "MAGLEMOS", "HOMOIOUS", "LEVALLOIS",
                    "TARDENOIS",
                ]) || self.string_at(-4, &["ALGES"]))
            {
                self.metaph_add('J');
            } else {
                self.metaph_add('S');
            }

            self.advance_counter(1, 0);
            return true;
        }

        false
    }

    fn encode_sio(&mut self) -> bool {
        // special case, irish name
        if self.string_start(&["SIOBHAN"]) {
            self.metaph_add('X');
            self.advance_counter(2, 0);
            return true;
        }

        if self.string_at(1, &["ION"]) {
            // e.g. "vision", "version"
            if self.is_vowel_at(-1) || self.string_at(-2, &["ER", "UR"]) {
                self.metaph_add('J');
            } else {
                // e.g. "declension"
                self.metaph_add('X');
            }
            self.advance_counter(2, 0);
            return true;
        }

        false
    }

    fn encode_anglicisations(&mut self) -> bool {
        // german & anglicisations, e.g. 'smith' match 'schmidt',
        // 'snider' match 'schneider'
        // also, -sz- in slavic language altho in hungarian it is pronounced 's'
        if self.string_at_start(0, &["SM", "SN", "SL"]) || self.string_at(1, &["Z"]) {
            self.metaph_add_alt(Some('S'), Some('X'));

            // eat redundant 'Z'
            if self.string_at(1, &["Z"]) {
                self.idx += 1;
            }

            return true;
        }

        false
    }

    fn encode_sc(&mut self) -> bool {
        if self.string_at(0, &["SC"]) {
            // exception 'viscount'
            if self.string_at(-2, &["VISCOUNT"]) {
                return true;
            }

            // encode "-SC<front vowel>-"
            if self.string_at(2, &["I", "E", "Y"]) {
                // e.g. "conscious", "prosciutto"
                if self.string_at(2, &["IUT", "IOUS"])
                    || self.string_at(-2, &["FASCIS"])
                    || self.string_at(-3, &["CONSCIEN", "CRESCEND", "CONSCION"])
                    || self.string_at(-4, &["OMNISCIEN"])
                {
                    self.metaph_add('X');
                } else if self.string_at(0, &["SCIVV", "SCIRO", "SCIPIO", "SCEPTIC", "SCEPSIS"])
                    || self.string_at(-2, &["PISCITELLI"])
                {
                    self.metaph_add_str("SK", "SK");
                } else {
                    self.metaph_add('S');
                }

                self.idx += 1;
                return true;
            }

            self.metaph_add_str("SK", "SK");
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_sei_sui_sier(&mut self) -> bool {
        // "nausea" by itself has => NJ as a more likely encoding. Other forms
        // using "nause-" have X or S as more familiar pronunciations
        if self.string_at_end(-3, &["NAUSEA"])
            || self.string_at(-2, &["CASUI"])
            || (self.string_at(-1, &["OSIER", "ASIER"])
                && !(self.string_start(&["OSIER", "EASIER"])
                    || self.string_at(-2, &["ROSIER", "MOSIER"])))
        {
            self.metaph_add_alt(Some('J'), Some('X'));
            self.advance_counter(2, 0);
            return true;
        }

        false
    }

    fn encode_sea(&mut self) -> bool {
        if self.string_exact(&["SEAN"])
            || (self.string_at(-3, &["NAUSEO"]) && !self.string_at(-3, &["NAUSEAT"]))
        {
            self.metaph_add('X');
            self.advance_counter(2, 0);
            return true;
        }

        false
    }

    //////////////////////////////////////////////////////////////////////////
    // 'T'
    //////////////////////////////////////////////////////////////////////////

    fn encode_t(&mut self) {
        if self.encode_t_initial()
            || self.encode_tch()
            || self.encode_silent_french_t()
            || self.encode_tun_tul_tua_tuo()
            || self.encode_tue_teu_teou_tul_tie()
            || self.encode_tur_tiu_suffixes()
            || self.encode_ti()
            || self.encode_tient()
            || self.encode_tsch()
            || self.encode_tzsch()
            || self.encode_th_pronounced_separately()
            || self.encode_tth()
            || self.encode_th()
        {
            return;
        }

        // eat redundant 'T' or 'D'
        if self.string_at(1, &["T", "D"]) {
            self.idx += 1;
        }
        self.metaph_add('T');
    }

    fn encode_t_initial(&mut self) -> bool {
        if self.idx == 0 {
            // americans usually pronounce "tzar" as "zar"
            if self.string_at(1, &["SAR", "ZAR"]) {
                return true;
            }

            // old 'École française d'Extrême-Orient' chinese pinyin
            // where 'ts-' => 'X'
            if self.string_exact(&["TSO", "TSA", "TSU", "TSAO", "TSAI", "TSING", "TSANG"]) {
                self.metaph_add('X');
                self.advance_counter(2, 1);
                return true;
            }

            // "TS<vowel>-" at start can be pronounced both with and without 'T'
            if self.char_next_is('S') && self.is_vowel_at(2) {
                self.metaph_add_str("TS", "S");
                self.advance_counter(2, 1);
                return true;
            }

            // e.g. "Tjaarda"
            if self.char_next_is('J') {
                self.metaph_add('X');
                self.advance_counter(2, 1);
                return true;
            }

            if self.string_exact(&["THU"])
                || self.string_at(1, &["HAI", "HUY", "HAO", "HYME", "HYMY", "HANH", "HERES"])
            {
                self.metaph_add('T');
                self.advance_counter(2, 1);
                return true;
            }
        }

        false
    }

    fn encode_tch(&mut self) -> bool {
        if self.string_at(1, &["CH"]) {
            self.metaph_add('X');
            self.idx += 2;
            return true;
        }

        false
    }

    fn encode_silent_french_t(&self) -> bool {
        // french silent T familiar to americans
        (self.string_at_end(-4, &["MONET", "GENET", "CHAUT"])
            || self.string_at(-2, &["POTPOURRI"])
            || self.string_at(-3, &["MORTGAGE", "BOATSWAIN"])
            || self.string_at(
                -4,
                &["BERET", "BIDET", "FILET", "DEBUT", "DEPOT", "PINOT", "TAROT"],
            )
            || self.string_at(
                -5,
                &[
                    "BALLET", "BUFFET", "CACHET", "CHALET", "ESPRIT", "RAGOUT", "GOULET",
                    "CHABOT", "BENOIT",
                ],
            )
            || self.string_at(
                -6,
                &[
                    "GOURMET", "BOUQUET", "CROCHET", "CROQUET", "PARFAIT", "PINCHOT",
                    "CABARET", "PARQUET", "RAPPORT", "TOUCHET", "COURBET", "DIDEROT",
                ],
            )
            || self.string_at(
                -7,
                &[
                    "ENTREPOT", "CABERNET", "DUBONNET", "MASSENET", "MUSCADET", "RICOCHET",
                    "ESCARGOT",
                ],
            )
            || self.string_at(
                -8,
                &["SOBRIQUET", "CABRIOLET", "CASSOULET", "OUBRIQUET", "CAMEMBERT"],
            ))
            && !self.string_at(1, &["AN", "RY", "IC", "OM", "IN"])
    }

    fn encode_tun_tul_tua_tuo(&mut self) -> bool {
        // e.g. "fortune", "fortunate"
        if self.string_at(-3, &["FORTUN"])
            // e.g. "capitulate"
            || (self.string_at(0, &["TUL"]) && self.is_vowel_at(-1) && self.is_vowel_at(3))
            // e.g. "obituary", "barbituate"
            || self.string_at(-2, &["BITUA", "BITUE"])
            // e.g. "actual"
            || (self.idx > 1 && self.string_at(0, &["TUA", "TUO"]))
        {
            self.metaph_add_alt(Some('X'), Some('T'));
            return true;
        }

        false
    }

    fn encode_tue_teu_teou_tul_tie(&mut self) -> bool {
        // e.g. "fluent"
        if self.string_at(1, &["UENT"])
            || self.string_at(-4, &["RIGHTEOUS"])
            || self.string_at(-3, &["STATUTE", "AMATEUR", "STATUTOR"])
            // e.g. "blastula", "pasteur"
            || self.string_at(-1, &["NTULE", "NTULA", "STULE", "STULA", "STEUR"])
            // e.g. "statue"
            || self.string_at_end(0, &["TUE"])
            // e.g. "constituency"
            || self.string_at(0, &["TUENC"])
            // e.g. "patience"
            || self.string_at_end(0, &["TIENCE"])
        {
            self.metaph_add_alt(Some('X'), Some('T'));
            self.advance_counter(1, 0);
            return true;
        }

        false
    }

    fn encode_tur_tiu_suffixes(&mut self) -> bool {
        // 'adventure', 'musculature'
        if self.idx > 0 && self.string_at(1, &["URE", "URA", "URI", "URY", "URO", "IUS"]) {
            // exceptions e.g. 'tessitura', mostly from romance languages
            if (self.string_at_end(1, &["URA", "URO"]) && !self.string_at(-3, &["VENTURA"]))
                // e.g. "kachaturian", "hematuria"
                || self.string_at(1, &["URIA"])
            {
                self.metaph_add('T');
            } else {
                self.metaph_add_alt(Some('X'), Some('T'));
            }

            self.advance_counter(1, 0);
            return true;
        }

        false
    }

    fn encode_ti(&mut self) -> bool {
        // '-tio-', '-tia-', '-tiu-'
        // except combining forms where T already pronounced e.g 'rooseveltian'
        if (self.string_at(1, &["IO"]) && !self.string_at(-1, &["ETIOL"]))
            || self.string_at(1, &["IAL"])
            || self.string_at(-1, &["RTIUM", "ATIUM"])
            || ((self.string_at(1, &["IAN"]) && self.idx > 0)
                && !(self.string_at(-4, &["FAUSTIAN"])
                    || self.string_at(-5, &["PROUSTIAN"])
                    || self.string_at(-2, &["TATIANA"])
                    || self.string_at(-3, &["KANTIAN", "GENTIAN"])
                    || self.string_at(-8, &["ROOSEVELTIAN"]))
                || (self.string_at_end(0, &["TIA"])
                    // exceptions where the pronunciation is usually X
                    && !(self.string_at(-3, &["HESTIA", "MASTIA"])
                        || self.string_at(-2, &["OSTIA"])
                        || self.string_start(&["TIA"])
                        || self.string_at(-5, &["IZVESTIA"])))
                || self.string_at(1, &["IATE", "IATI", "IABL", "IATO", "IARY"])
                || self.string_at(-5, &["CHRISTIAN"]))
        {
            if self.string_at_start(-2, &["ANTI"]) || self.string_start(&["PATIO", "PITIA", "DUTIA"]) {
                self.metaph_add('T');
            } else if self.string_at(-4, &["EQUATION"]) {
                self.metaph_add('J');
            } else if self.string_at(0, &["TION"]) {
                self.metaph_add('X');
            } else if self.string_start(&["KATIA", "LATIA"]) {
                self.metaph_add_alt(Some('T'), Some('X'));
            } else {
                self.metaph_add_alt(Some('X'), Some('T'));
            }

            self.advance_counter(2, 0);
            return true;
        }

        false
    }

    fn encode_tient(&mut self) -> bool {
        // e.g. 'patient'
        if self.string_at(1, &["IENT"]) {
            self.metaph_add_alt(Some('X'), Some('T'));
            self.advance_counter(2, 0);
            return true;
        }

        false
    }

    fn encode_tsch(&mut self) -> bool {
        // 'deutsch'
        if self.string_at(0, &["TSCH"])
            // combining forms in german where the 'T' is pronounced separately
            && !self.string_at(-3, &["WELT", "KLAT", "FEST"])
        {
            // pronounced the same as "ch" in "chit" => X
            self.metaph_add('X');
            self.idx += 3;
            return true;
        }

        false
    }

    fn encode_tzsch(&mut self) -> bool {
        // 'neitzsche'
        if self.string_at(0, &["TZSCH"]) {
            self.metaph_add('X');
            self.idx += 4;
            return true;
        }

        false
    }

    fn encode_th_pronounced_separately(&mut self) -> bool {
        // 'adulthood', 'bithead', 'apartheid'
        if (self.idx > 0
            && self.string_at(
                1,
                &[
                    "HOOD", "HEAD", "HEID", "HAND", "HILL", "HOLD", "HAWK", "HEAP", "HERD",
                    "HOLE", "HOOK", "HUNT", "HUMO", "HAUS", "HOFF", "HARD",
                ],
            )
            && !self.string_at(-3, &["SOUTH", "NORTH"]))
            || self.string_at(1, &["HOUSE", "HEART", "HASTE", "HYPNO", "HEQUE"])
            // watch out for greek root "-thallic"
            || (self.string_at_end(1, &["HALL"]) && !self.string_at(-3, &["SOUTH", "NORTH"]))
            || (self.string_at_end(1, &["HAM"])
                && !self.string_start(&[
                    "GOTHAM", "WITHAM", "LATHAM", "BENTHAM", "WALTHAM", "WORTHAM", "GRANTHAM",
                ]))
            || (self.string_at(1, &["HATCH"])
                && !(self.idx == 0 || self.string_at(-2, &["UNTHATCH"])))
            || self.string_at(-3, &["GOETHE", "WARTHOG"])
            // and some special cases where "-TH-" is usually pronounced 'T'
            || self.string_at(-2, &["ESTHER", "NATHALIE"])
        {
            // special case
            if self.string_at(-3, &["POSTHUM"]) {
                self.metaph_add('X');
            } else {
                self.metaph_add('T');
            }
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_tth(&mut self) -> bool {
        // 'matthew' vs. 'outthink'
        if self.string_at(0, &["TTH"]) {
            if self.string_at(-2, &["MATTH"]) {
                self.metaph_add('0');
            } else {
                self.metaph_add_str("T0", "T0");
            }
            self.idx += 2;
            return true;
        }

        false
    }

    fn encode_th(&mut self) -> bool {
        if self.string_at(0, &["TH"]) {
            // '-clothes-'
            if self.string_at(-3, &["CLOTHES"]) {
                // vowel already encoded so skip right to S
                self.idx += 2;
                return true;
            }

            // special case "thomas", "thames", "beethoven" or germanic words
            if self.string_at(
                2,
                &[
                    "OMAS", "OMPS", "OMPK", "OMSO", "OMSE", "AMES", "OVEN", "OFEN", "ILDA",
                    "ILDE",
                ],
            ) || self.string_exact(&["THOM", "THOMS"])
                || self.string_start(&["SCH", "VAN ", "VON "])
            {
                self.metaph_add('T');
            } else {
                // give an 'etymological' 2nd encoding for "smith"
                if self.string_start(&["SM"]) {
                    self.metaph_add_alt(Some('0'), Some('T'));
                } else {
                    self.metaph_add('0');
                }
            }

            self.idx += 1;
            return true;
        }

        false
    }

    //////////////////////////////////////////////////////////////////////////
    // 'V'
    //////////////////////////////////////////////////////////////////////////

    fn encode_v(&mut self) {
        // eat redundant 'V'
        if self.char_next_is('V') {
            self.idx += 1;
        }
        self.metaph_add_exact_approx("V", "F");
    }

    //////////////////////////////////////////////////////////////////////////
    // 'W'
    //////////////////////////////////////////////////////////////////////////

    fn encode_w(&mut self) {
        if self.encode_silent_w_at_beginning()
            || self.encode_witz_wicz()
            || self.encode_wr()
            || self.encode_initial_w_vowel()
            || self.encode_wh()
            || self.encode_eastern_european_w()
        {
            return;
        }

        // e.g. 'zimbabwe'
        if self.vowels && self.string_at_end(0, &["WE"]) {
            self.metaph_add('A');
        }
    }

    fn encode_silent_w_at_beginning(&mut self) -> bool {
        self.string_at_start(0, &["WR"])
    }

    fn encode_witz_wicz(&mut self) -> bool {
        // polish e.g. 'filipowicz'
        if self.string_at_end(0, &["WICZ", "WITZ"]) {
            if self.vowels {
                // don't dupe A's
                if self.primary.last() == Some(&'A') {
                    self.metaph_add_str("TS", "FAX");
                } else {
                    self.metaph_add_str("ATS", "FAX");
                }
            } else {
                self.metaph_add_str("TS", "FX");
            }

            self.idx += 3;
            return true;
        }

        false
    }

    fn encode_wr(&mut self) -> bool {
        // can also be in middle of word
        if self.string_at(0, &["WR"]) {
            self.metaph_add('R');
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_initial_w_vowel(&mut self) -> bool {
        if self.idx == 0 && self.is_vowel_at(1) {
            // Witter should match Vitter
            if self.string_start(GERMANIC_OR_SLAVIC_W_NAMES) {
                if self.vowels {
                    self.metaph_add_exact_approx_alt("A", "VA", "A", "FA");
                } else {
                    self.metaph_add_exact_approx_alt("A", "V", "A", "F");
                }
            } else {
                self.metaph_add('A');
            }

            self.idx = self.skip_vowels(self.idx + 1);
            return true;
        }

        false
    }

    fn encode_wh(&mut self) -> bool {
        if self.string_at(0, &["WH"]) {
            // cases where it is pronounced as H
            // e.g. 'who', 'whole'
            if self.char_at(2, 'O')
                && !self.string_at(2, &["OA", "OP", "OOP", "OMP", "ORL", "ORT", "OOSH"])
            {
                self.metaph_add('H');
                self.advance_counter(2, 1);
                return true;
            }

            // combining forms, e.g. 'hollowhearted', 'rawhide'
            if self.string_at(
                2,
                &[
                    "IDE", "ARD", "EAD", "AWK", "ERD", "OOK", "AND", "OLE", "OOD", "EART",
                    "OUSE", "OUND", "AMMER",
                ],
            ) {
                self.metaph_add('H');
                self.idx += 1;
                return true;
            }

            if self.idx == 0 {
                self.metaph_add('A');
                self.idx = self.skip_vowels(self.idx + 2);
                return true;
            }

            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_eastern_european_w(&mut self) -> bool {
        // Arnow should match Arnoff
        if (self.idx == self.last && self.is_vowel_at(-1))
            || self.string_at(-1, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
            || self.string_at_end(0, &["WIAK", "WICKI", "WACKI"])
            || self.string_start(&["SCH"])
        {
            self.metaph_add_exact_approx_alt("", "V", "", "F");
            return true;
        }

        false
    }

    //////////////////////////////////////////////////////////////////////////
    // 'X'
    //////////////////////////////////////////////////////////////////////////

    fn encode_x(&mut self) {
        if self.encode_initial_x()
            || self.encode_greek_x()
            || self.encode_x_special_cases()
            || self.encode_x_to_h()
            || self.encode_x_vowel()
            || self.encode_french_x_final()
        {
            return;
        }

        // eat redundant 'X' or other redundant cases
        // e.g. "excite", "exceed"
        if self.string_at(1, &["X", "Z", "S", "CE", "CE"]) {
            self.idx += 1;
        }
    }

    fn encode_initial_x(&mut self) -> bool {
        // current chinese pinyin spelling
        if self.string_start(&["XU", "XIA", "XIO", "XIE"]) {
            self.metaph_add('X');
            return true;
        }

        if self.idx == 0 {
            self.metaph_add('S');
            return true;
        }

        false
    }

    /// 'xylophone', 'xylem', 'xanthoma', 'xeno-'
    fn encode_greek_x(&mut self) -> bool {
        if self.string_at(1, &["YLO", "YLE", "ENO", "ANTH"]) {
            self.metaph_add('S');
            return true;
        }

        false
    }

    /// Special cases, "LUXUR-", "Texeira".
    fn encode_x_special_cases(&mut self) -> bool {
        if self.string_at(-2, &["LUXUR"]) {
            self.metaph_add_exact_approx("GJ", "KJ");
            return true;
        }

        if self.string_start(&["TEXEIRA", "TEIXEIRA"]) {
            self.metaph_add('X');
            return true;
        }

        false
    }

    /// Special case where americans know the proper mexican indian
    /// pronunciation of this name.
    fn encode_x_to_h(&mut self) -> bool {
        if self.string_at(-2, &["OAXACA"]) || self.string_at(-3, &["QUIXOTE"]) {
            self.metaph_add('H');
            return true;
        }

        false
    }

    fn encode_x_vowel(&mut self) -> bool {
        // e.g. "sexual", "connexion" (british), "noxious"
        if self.string_at(1, &["UAL", "ION", "IOU"]) {
            self.metaph_add_str("KX", "KS");
            self.advance_counter(2, 0);
            return true;
        }

        false
    }

    fn encode_french_x_final(&mut self) -> bool {
        if !(self.idx == self.last
            && (self.string_at(-3, &["IAU", "EAU", "IEU"])
                || self.string_at(-2, &["AI", "AU", "OU", "OI", "EU"])))
        {
            self.metaph_add_str("KS", "KS");
        }

        false
    }

    //////////////////////////////////////////////////////////////////////////
    // 'Z'
    //////////////////////////////////////////////////////////////////////////

    fn encode_z(&mut self) {
        if self.encode_zz()
            || self.encode_zu_zier_zs()
            || self.encode_french_ez()
            || self.encode_german_z()
            || self.encode_zh()
        {
            return;
        }

        self.metaph_add('S');

        // eat redundant 'Z'
        if self.char_next_is('Z') {
            self.idx += 1;
        }
    }

    /// "-ZZ-" where it is obviously part of an italian word and pronounced
    /// as TS.
    fn encode_zz(&mut self) -> bool {
        // "abruzzi", 'pizza'
        if self.char_next_is('Z')
            && (self.string_at_end(2, &["I", "O", "A"])
                || self.string_at(-2, &["MOZZARELL", "PIZZICATO", "PUZZONLAN"]))
        {
            self.metaph_add_str("TS", "S");
            self.idx += 1;
            return true;
        }

        false
    }

    fn encode_zu_zier_zs(&mut self) -> bool {
        if (self.idx == 1 && self.string_at(-1, &["AZUR"]))
            || (self.string_at(0, &["ZIER"]) && !self.string_at(-2, &["VIZIER"]))
            || self.string_at(0, &["ZSA"])
        {
            self.metaph_add_alt(Some('J'), Some('S'));

            if self.string_at(0, &["ZSA"]) {
                self.idx += 1;
            }
            return true;
        }

        false
    }

    /// Cases where americans recognize "-EZ" as part of a french word where Z
    /// is not pronounced.
    fn encode_french_ez(&self) -> bool {
        (self.idx == 3 && self.string_at(-3, &["CHEZ"])) || self.string_at(-5, &["RENDEZ"])
    }

    /// Cases where "-Z-" is in a german word where Z => TS.
    fn encode_german_z(&mut self) -> bool {
        if self.string_exact(&["NAZI"])
            || self.string_at(-2, &["NAZIFY", "MOZART"])
            || self.string_at(-3, &["HOLZ", "HERZ", "MERZ", "FITZ", "HERZOG"])
            || (self.string_at(-3, &["GANZ"]) && !self.is_vowel_at(1))
            || self.string_at(-4, &["STOLZ", "PRINZ", "VENEZIA"])
            // german words containing "sch" but not schlimazel, schmooze
            || (self.string_contains("SCH") && !self.string_end(&["IZE", "OZE", "ZEL"]))
            || (self.idx > 0 && self.string_at(0, &["ZEIT"]))
            || self.string_at(-3, &["WEIZ"])
        {
            if self.idx > 0 && self.char_at(-1, 'T') {
                self.metaph_add('S');
            } else {
                self.metaph_add_str("TS", "TS");
            }
            return true;
        }

        false
    }

    fn encode_zh(&mut self) -> bool {
        // chinese pinyin e.g. 'zhao', also english "phonetic spelling"
        if self.char_next_is('H') {
            self.metaph_add('J');
            self.idx += 1;
            return true;
        }

        false
    }

    //////////////////////////////////////////////////////////////////////////
    // Vowels
    //////////////////////////////////////////////////////////////////////////

    fn encode_vowels(&mut self) {
        if self.idx == 0 {
            // all initial vowels map to 'A' as of Double Metaphone
            self.metaph_add('A');
        } else if self.vowels {
            if !self.char_at(0, 'E') {
                if self.encode_skip_silent_ue() {
                    return;
                }
                if self.encode_o_silent() {
                    return;
                }
                // encode all vowels and diphthongs to the same value
                self.metaph_add('A');
            } else {
                self.encode_e_pronounced();
            }
        }

        if !(!self.is_vowel_at(-2) && self.string_at(-1, &["LEWA", "LEWO", "LEWI"])) {
            self.idx = self.skip_vowels(self.idx + 1);
        }
    }

    fn encode_skip_silent_ue(&mut self) -> bool {
        // always silent except for cases listed below
        if (self.string_at(-1, &["QUE", "GUE"])
            && !self.string_start(&[
                "RISQUE",
                "PIROGUE",
                "ENRIQUE",
                "BARBEQUE",
                "PALENQUE",
                "APPLIQUE",
                "COMMUNIQUE",
            ])
            && !self.string_at(-3, &["ARGUE", "SEGUE"]))
            && self.idx > 1
            && (self.idx + 1 == self.last || self.string_start(&["JACQUES"]))
        {
            self.idx = self.skip_vowels(self.idx);
            return true;
        }

        false
    }

    /// Cases where non-initial 'E' is pronounced, taking care to detect
    /// unusual cases from the greek. Only called when non-initial vowel
    /// encoding is turned on.
    fn encode_e_pronounced(&mut self) {
        // special cases with two pronunciations, 'agape', 'lame', 'resume'
        if self.string_exact(&["LAME", "SAKE", "PATE", "AGAPE"])
            || (self.string_start(&["RESUME"]) && self.idx == 5)
        {
            self.metaph_add_alt(None, Some('A'));
            return;
        }

        // special case "inge" => 'INGA', 'INJ'
        if self.string_exact(&["INGE"]) {
            self.metaph_add_alt(Some('A'), None);
            return;
        }

        // special handling due to the difference in the pronunciation
        // of the '-D'
        if self.idx == 5 && self.string_start(&["BLESSED", "LEARNED"]) {
            self.metaph_add_exact_approx_alt("D", "AD", "T", "AT");
            self.idx += 1;
            return;
        }

        // encode all vowels and diphthongs to the same value
        if (!self.encode_e_silent() && !self.flag_al_inversion && !self.encode_silent_internal_e())
            || self.encode_e_pronounced_exceptions()
        {
            self.metaph_add('A');
        }

        // now that we've visited the vowel in question
        self.flag_al_inversion = false;
    }

    fn encode_o_silent(&mut self) -> bool {
        // if "iron" at beginning or end of word and not "irony"
        if self.char_at(0, 'O')
            && self.string_at(-2, &["IRON"])
            && (self.string_start(&["IRON"]) || self.string_at_end(-2, &["IRON"]))
            && !self.string_at(-2, &["IRONIC"])
        {
            return true;
        }

        false
    }

    fn encode_e_silent(&mut self) -> bool {
        if self.encode_e_pronounced_at_end() {
            return false;
        }

        // 'e' silent when last letter
        if self.idx == self.last
            // also silent if before plural 's' or past tense or participle
            // 'd', e.g. 'grapes' and 'banished' => PNXT
            || (self.idx > 1
                && self.idx + 1 == self.last
                && self.string_at(1, &["S", "D"])
                // and not e.g. "nested", "rises", or "pieces" => RASAS
                && !(self.string_at(-1, &["TED", "SES", "CES"])
                    || self.string_start(&[
                        "ABED", "IMED", "JARED", "AHMED", "HAMED", "JAVED", "NORRED",
                        "MEDVED", "MERCED", "ALLRED", "KHALED", "RASHED", "MASJED",
                        "MOHAMED", "MOHAMMED", "MUHAMMED", "MOUHAMED", "ANTIPODES",
                        "ANOPHELES",
                    ])))
            // e.g. 'wholeness', 'boneless', 'barely'
            || self.string_at_end(1, &["NESS", "LESS"])
            || (self.string_at_end(1, &["LY"]) && !self.string_start(&["CICELY"]))
        {
            return true;
        }

        false
    }

    /// Words where an 'E' at the end of the word is pronounced. Special
    /// cases, mostly from the greek, spanish, japanese, italian, and french
    /// words normally having an acute accent.
    fn encode_e_pronounced_at_end(&mut self) -> bool {
        self.idx == self.last
            && (self.string_at(-6, &["STROPHE"])
                // if a vowel is before the 'E', the vowel eater will have
                // eaten it. Otherwise, consonant + 'E' will need 'E'
                // pronounced
                || self.input.len() == 2
                || (self.input.len() == 3 && !self.is_vowel_at(-(self.idx as isize)))
                // these german name endings can be relied on to have the 'e'
                // pronounced
                || (self.string_at_end(
                    -2,
                    &[
                        "BKE", "DKE", "FKE", "KKE", "LKE", "NKE", "MKE", "PKE", "TKE", "VKE",
                        "ZKE",
                    ],
                ) && !self.string_start(&["FINKE", "FUNKE", "FRANKE"]))
                || self.string_at_end(-4, &["SCHKE"])
                || self.word_in(&FINAL_E_PRONOUNCED))
    }

    fn encode_silent_internal_e(&mut self) -> bool {
        // 'olesen' but not 'olen'
        (self.string_start(&["OLE"]) && self.encode_e_suffix(3))
            || (self.string_start(&[
                "BARE", "FIRE", "FORE", "GATE", "HAGE", "HAVE", "HAZE", "HOLE", "CAPE",
                "HUSE", "LACE", "LINE", "LIVE", "LOVE", "MORE", "MOSE", "MORE", "NICE",
                "RAKE", "ROBE", "ROSE", "SISE", "SIZE", "WARE", "WAKE", "WISE", "WINE",
            ]) && self.encode_e_suffix(4))
            || (self.string_start(&[
                "BLAKE", "BRAKE", "BRINE", "CARLE", "CLEVE", "DUNNE", "HEDGE", "HOUSE",
                "JEFFE", "LUNCE", "STOKE", "STONE", "THORE", "WEDGE", "WHITE",
            ]) && self.encode_e_suffix(5))
            || (self.string_start(&["BRIDGE", "CHEESE"]) && self.encode_e_suffix(6))
            || self.string_at(-5, &["CHARLES"])
    }

    fn encode_e_suffix(&mut self, at: usize) -> bool {
        // silent suffix and not a pronouncing suffix
        let offset = at as isize - self.idx as isize;

        if self.idx == at - 1
            && self.input.len() > at + 1
            && (self.is_vowel_at(offset + 1)
                || (self.string_at(offset, &["ST", "SL"]) && self.input.len() > at + 2))
        {
            // now filter endings that will cause the 'e' to be pronounced
            // e.g. 'bridgewood' - the other vowels will get eaten up so we
            // need to put one in here
            // e.g. 'bridgette', 'olena', 'bridget'
            if self.string_at_end(
                offset,
                &[
                    "T", "R", "TA", "TT", "NA", "NO", "NE", "RS", "RE", "LA", "AU", "RO",
                    "RA", "TTE", "LIA", "NOW", "ROS", "RAS", "WOOD", "WATER", "WORTH",
                ],
            ) {
                return false;
            }

            return true;
        }

        false
    }

    /// Exceptions where 'E' is pronounced where it usually wouldn't be, and
    /// also some cases where 'LE' transposition rules don't apply and the
    /// vowel needs to be encoded here.
    fn encode_e_pronounced_exceptions(&mut self) -> bool {
        // greek names e.g. "herakles" or hispanic names e.g. "robles", where
        // 'e' is pronounced, other exceptions
        (self.idx + 1 == self.last
            && (self.string_at_end(-3, &["OCLES", "ACLES", "AKLES"])
                || self.string_start(SPANISH_ES_NAMES)))
            || self.string_at(-2, &["FRED", "DGES", "DRED", "GNES"])
            || self.string_at(-5, &["PROBLEM", "RESPLEN"])
            || self.string_at(-4, &["REPLEN"])
            || self.string_at(-3, &["SPLE"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Encoder;

    fn scan_at(word: &str, idx: usize) -> Scan<'static> {
        let input: Vec<char> = word.chars().collect();
        let word: String = input.iter().collect();
        let last = input.len() - 1;
        Scan {
            vowels: false,
            exact: false,
            max: DEFAULT_MAX_CODE_LENGTH,
            word,
            input,
            idx,
            last,
            flag_al_inversion: false,
            primary: Vec::new(),
            secondary: Vec::new(),
            trace: None,
        }
    }

    fn keys(encoder: Metaphone3, word: &str) -> (String, String) {
        encoder.metaphone3(word).into_pair()
    }

    #[test]
    fn test_string_at() {
        let scan = scan_at("TESTING", 0);

        assert!(scan.string_at(1, &["EST"]));
        assert!(scan.string_at(4, &["ING"]));
        assert!(scan.string_at(0, &["T", "TE"]));
        assert!(!scan.string_at(0, &["X"]));
        assert!(!scan.string_at(-1, &["T"]));
        assert!(!scan.string_at(7, &["G"]));
    }

    #[test]
    fn test_string_at_candidate_overrun_stops_scan() {
        // candidates are checked in order and a candidate running past the
        // end of the input ends the whole lookup
        let scan = scan_at("SW", 0);

        assert!(!scan.string_start(&["SCH", "SW"]));
        assert!(scan.string_start(&["SW"]));
        assert!(!scan.is_slavo_germanic());
    }

    #[test]
    fn test_string_at_end() {
        let scan = scan_at("JOSE", 2);

        assert!(scan.string_at_end(0, &["SE"]));
        assert!(!scan.string_at_end(0, &["S"]));
        assert!(scan.string_at_end(-2, &["JOSE"]));
    }

    #[test]
    fn test_string_exact() {
        let scan = scan_at("HORS", 0);

        assert!(scan.string_exact(&["HORS"]));
        assert!(!scan.string_exact(&["HOR"]));
        assert!(!scan.string_exact(&["HORSE"]));
    }

    #[test]
    fn test_char_at_out_of_range() {
        let scan = scan_at("AB", 0);

        assert!(scan.char_at(0, 'A'));
        assert!(scan.char_at(1, 'B'));
        assert!(!scan.char_at(-1, 'A'));
        assert!(!scan.char_at(2, 'B'));
    }

    #[test]
    fn test_skip_vowels() {
        let scan = scan_at("BOAT", 1);
        assert_eq!(scan.skip_vowels(1), 2);

        // the 'W' of a polish "-OWICZ" ending stays in place
        let scan = scan_at("FILIPOWICZ", 5);
        assert_eq!(scan.skip_vowels(6), 5);
    }

    #[test]
    fn test_slavo_germanic() {
        assert!(scan_at("SCHMIDT", 0).is_slavo_germanic());
        assert!(scan_at("WRIGHT", 0).is_slavo_germanic());
        assert!(scan_at("JOSE", 0).is_slavo_germanic());
        assert!(!scan_at("SMITH", 0).is_slavo_germanic());
    }

    #[test]
    fn test_empty_input() {
        let result = Metaphone3::default().metaphone3("");

        assert_eq!(result.primary(), "");
        assert_eq!(result.secondary(), "");
    }

    #[test]
    fn test_single_letter() {
        assert_eq!(keys(Metaphone3::default(), "A"), ("A".to_string(), String::new()));
        assert_eq!(keys(Metaphone3::default(), "a"), ("A".to_string(), String::new()));
    }

    #[test]
    fn test_default_keys() {
        let data: Vec<(&str, &str, &str)> = vec![
            ("ACK", "AK", ""),
            ("EEK", "AK", ""),
            ("ACHE", "AK", "AX"),
            ("DUMB", "TM", ""),
            ("KNIGHT", "NKT", ""),
            ("WRIGHT", "RKT", ""),
            ("SMITH", "SM0", "XMT"),
            ("SMYTH", "SM0", "XMT"),
            ("SCHMIDT", "XMT", ""),
            ("THOMPSON", "TMPSN", ""),
            ("TESTING", "TSTNK", ""),
            ("XAVIER", "SFR", ""),
            ("SUPERNODE", "SPRNT", ""),
            ("FILIPOWICZ", "FLPTS", "FLPFX"),
        ];

        let encoder = Metaphone3::default();
        for (word, primary, secondary) in data {
            let result = encoder.metaphone3(word);
            assert_eq!(result.primary(), primary, "primary of {word}");
            assert_eq!(result.secondary(), secondary, "secondary of {word}");
        }
    }

    #[test]
    fn test_vowel_keys() {
        let data: Vec<(&str, &str, &str)> = vec![
            ("ACHE", "AK", "AX"),
            ("DUMB", "TAM", ""),
            ("KNIGHT", "NAKT", ""),
            ("WRIGHT", "RAKT", ""),
            ("SMITH", "SMA0", "XMAT"),
            ("SCHMIDT", "XMAT", ""),
            ("TESTING", "TASTANK", ""),
            ("XAVIER", "SAFAR", ""),
            ("SUPERNODE", "SAPARNAT", ""),
            ("FILIPOWICZ", "FALAPATS", "FALAPAFA"),
        ];

        let encoder = Metaphone3::default().with_encode_vowels(true);
        for (word, primary, secondary) in data {
            let result = encoder.metaphone3(word);
            assert_eq!(result.primary(), primary, "primary of {word}");
            assert_eq!(result.secondary(), secondary, "secondary of {word}");
        }
    }

    #[test]
    fn test_exact_keys() {
        let data: Vec<(&str, &str, &str)> = vec![
            ("ACHE", "AK", "AX"),
            ("DUMB", "DM", ""),
            ("KNIGHT", "NGT", ""),
            ("WRIGHT", "RGT", ""),
            ("SMITH", "SM0", "XMT"),
            ("SCHMIDT", "XMT", ""),
            ("TESTING", "TSTNG", ""),
            ("XAVIER", "SVR", ""),
            ("SUPERNODE", "SPRND", ""),
            ("FILIPOWICZ", "FLPTS", "FLPFX"),
        ];

        let encoder = Metaphone3::default().with_encode_exact(true);
        for (word, primary, secondary) in data {
            let result = encoder.metaphone3(word);
            assert_eq!(result.primary(), primary, "primary of {word}");
            assert_eq!(result.secondary(), secondary, "secondary of {word}");
        }
    }

    #[test]
    fn test_vowel_and_exact_keys() {
        let data: Vec<(&str, &str, &str)> = vec![
            ("ACHE", "AK", "AX"),
            ("DUMB", "DAM", ""),
            ("KNIGHT", "NAGT", ""),
            ("WRIGHT", "RAGT", ""),
            ("SMITH", "SMA0", "XMAT"),
            ("SCHMIDT", "XMAT", ""),
            ("TESTING", "TASTANG", ""),
            ("XAVIER", "SAVAR", ""),
            ("SUPERNODE", "SAPARNAD", ""),
            ("FILIPOWICZ", "FALAPATS", "FALAPAFA"),
        ];

        let encoder = Metaphone3::default()
            .with_encode_vowels(true)
            .with_encode_exact(true);
        for (word, primary, secondary) in data {
            let result = encoder.metaphone3(word);
            assert_eq!(result.primary(), primary, "primary of {word}");
            assert_eq!(result.secondary(), secondary, "secondary of {word}");
        }
    }

    #[test]
    fn test_truncation() {
        assert_eq!(keys(Metaphone3::new(3), "TESTING"), ("TST".to_string(), String::new()));
        // the 'X' handler appends a two symbol cluster right at the limit
        assert_eq!(keys(Metaphone3::new(2), "FOXES"), ("FK".to_string(), String::new()));
    }

    #[test]
    fn test_zero_max_length_uses_default() {
        assert_eq!(
            keys(Metaphone3::new(0), "TESTING"),
            keys(Metaphone3::default(), "TESTING")
        );
    }

    #[test]
    fn test_secondary_collapses_when_equal() {
        let result = Metaphone3::default().metaphone3("ACK");

        assert_eq!(result.primary(), "AK");
        assert_eq!(result.secondary(), "");
    }

    #[test]
    fn test_encoder_reuse() {
        let encoder = Metaphone3::default();
        let first = encoder.metaphone3("Wojciechowski");
        let second = encoder.metaphone3("Wojciechowski");

        assert_eq!(first, second);
    }

    #[test]
    fn test_is_metaphone3_equal() {
        let encoder = Metaphone3::default();

        assert!(encoder.is_metaphone3_equal("Smith", "Schmidt"));
        assert!(encoder.is_metaphone3_equal("Smith", "Smyth"));
        assert!(!encoder.is_metaphone3_equal("Peter", "Stevenson"));
        // blank keys never match each other
        assert!(!encoder.is_metaphone3_equal("", ""));
    }

    #[test]
    fn test_encoder_trait() {
        let encoder = Metaphone3::default();

        assert_eq!(encoder.encode("Thompson"), "TMPSN");
        assert!(encoder.is_encoded_equals("Smith", "Smyth"));
    }

    #[test]
    fn test_trace_events() {
        let mut events = Vec::new();
        let result = Metaphone3::default()
            .metaphone3_with_trace("BB", &mut |event| events.push(event));

        assert_eq!(result.primary(), "P");
        assert_eq!(
            events,
            vec![
                TraceEvent::Dispatch {
                    position: 0,
                    current: 'B'
                },
                TraceEvent::Primary {
                    position: 0,
                    symbol: 'P'
                },
                TraceEvent::Secondary {
                    position: 0,
                    symbol: 'P'
                },
            ]
        );
    }
}
