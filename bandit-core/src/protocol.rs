//! Wire format for the round exchange
//!
//! The agent sends the chosen arm as decimal ASCII followed by a NUL byte.
//! The environment answers with `<reward> <separator> <rounds>`, for example
//! `"1.0 , 7"`. Parsing is lenient: it takes whatever leading fields scan and
//! keeps the previous value for the rest.

/// Size of the receive buffer for one response.
pub const RECV_BUFFER_SIZE: usize = 256;

/// Encode an arm index for transmission.
pub fn encode_action(arm: usize) -> Vec<u8> {
    let mut buf = arm.to_string().into_bytes();
    buf.push(0);
    buf
}

/// Values carried by one environment response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Response {
    /// Reward for the last pulled arm
    pub reward: f64,
    /// Rounds completed so far
    pub rounds: u64,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            reward: 0.0,
            rounds: 0,
        }
    }
}

/// Parse a response, falling back to `previous` for fields that do not scan.
///
/// Only the text before the first NUL is considered.
pub fn parse_response(bytes: &[u8], previous: Response) -> Response {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let text = String::from_utf8_lossy(&bytes[..end]);
    let mut scanner = Scanner::new(&text);
    let mut response = previous;

    let Some(reward) = scanner.float() else {
        return response;
    };
    response.reward = reward;

    if scanner.separator().is_none() {
        return response;
    }

    if let Some(rounds) = scanner.unsigned() {
        response.rounds = rounds;
    }
    response
}

/// Field scanner over the response text.
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Longest prefix that reads as a decimal float, `inf` or `nan`.
    fn float(&mut self) -> Option<f64> {
        self.skip_whitespace();
        let bytes = self.rest.as_bytes();
        let mut i = 0;
        if matches!(bytes.first(), Some(b'+' | b'-')) {
            i += 1;
        }

        for word in ["infinity", "inf", "nan"] {
            let tail = &bytes[i..];
            if tail.len() >= word.len() && tail[..word.len()].eq_ignore_ascii_case(word.as_bytes())
            {
                let token = &self.rest[..i + word.len()];
                let value = token.to_ascii_lowercase().parse().ok()?;
                self.rest = &self.rest[i + word.len()..];
                return Some(value);
            }
        }

        let int_digits = count_digits(&bytes[i..]);
        i += int_digits;
        let mut frac_digits = 0;
        if bytes.get(i) == Some(&b'.') {
            frac_digits = count_digits(&bytes[i + 1..]);
            if int_digits + frac_digits > 0 {
                i += 1 + frac_digits;
            }
        }
        if int_digits + frac_digits == 0 {
            return None;
        }

        if matches!(bytes.get(i), Some(b'e' | b'E')) {
            let mut j = i + 1;
            if matches!(bytes.get(j), Some(b'+' | b'-')) {
                j += 1;
            }
            let exp_digits = count_digits(&bytes[j..]);
            if exp_digits > 0 {
                i = j + exp_digits;
            }
        }

        let value = self.rest[..i].parse().ok()?;
        self.rest = &self.rest[i..];
        Some(value)
    }

    /// Any single non-whitespace character.
    fn separator(&mut self) -> Option<char> {
        self.skip_whitespace();
        let c = self.rest.chars().next()?;
        self.rest = &self.rest[c.len_utf8()..];
        Some(c)
    }

    /// Decimal digits with an optional leading `+`.
    fn unsigned(&mut self) -> Option<u64> {
        self.skip_whitespace();
        let bytes = self.rest.as_bytes();
        let start = usize::from(bytes.first() == Some(&b'+'));
        let digits = count_digits(&bytes[start..]);
        if digits == 0 {
            return None;
        }
        let value = self.rest[start..start + digits].parse().ok()?;
        self.rest = &self.rest[start + digits..];
        Some(value)
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
