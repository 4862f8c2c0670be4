//! Deterministic text cleanup applied before tokenization.

/// Substrings replaced with a space before anything else: the mobile client
/// signature and the filler characters posts tend to be padded with.
/// `ㅋ` and `ㅡ` sit inside the allowed jamo ranges, so they must go before
/// the charset filter runs.
const NOISE: [&str; 3] = ["- dc official App", "ㅋ", "ㅡ"];

/// Cleans `raw` into the canonical form fed to the tokenizer.
///
/// Keeps Hangul syllables and jamo, ASCII letters and digits, `-`, `%`, `.`
/// and `?`; everything else becomes a space, then whitespace runs collapse
/// to single spaces. Idempotent; all-noise input yields the empty string.
pub fn canonicalize(raw: &str) -> String {
    let mut text = raw.to_owned();
    for noise in NOISE {
        text = text.replace(noise, " ");
    }
    text = text.replace('\n', " ");
    let filtered: String = text
        .chars()
        .map(|c| if is_allowed(c) { c } else { ' ' })
        .collect();
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_allowed(c: char) -> bool {
    matches!(c,
        '가'..='힣'
        | 'ㄱ'..='ㅎ'
        | 'ㅏ'..='ㅣ'
        | 'a'..='z'
        | 'A'..='Z'
        | '0'..='9'
        | '-' | '%' | '.' | '?')
}

#[cfg(test)]
mod tests {
    use super::canonicalize;

    #[test]
    fn strips_signature_and_fillers() {
        assert_eq!(canonicalize("오른다ㅋㅋㅋ- dc official App"), "오른다");
    }

    #[test]
    fn replaces_disallowed_chars_with_spaces() {
        assert_eq!(canonicalize("삼성전자 +5% 간다!!"), "삼성전자 5% 간다");
    }

    #[test]
    fn collapses_whitespace_and_newlines() {
        assert_eq!(canonicalize("up\n\ndown   now"), "up down now");
    }

    #[test]
    fn keeps_hyphen_percent_period_question() {
        assert_eq!(canonicalize("-5.2% why?"), "-5.2% why?");
    }

    #[test]
    fn empty_and_all_noise_input() {
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize("ㅋㅋㅋㅡㅡ\n- dc official App"), "");
    }

    #[test]
    fn idempotent() {
        let once = canonicalize("떡상 가즈아~~ ㅋㅋ- dc official App 10% 온다?\n");
        assert_eq!(canonicalize(&once), once);
    }
}
