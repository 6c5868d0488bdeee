use async_trait::async_trait;
use fancy_regex::Regex;
use relief_application::ports::OfficialUpdatesSource;
use relief_domain::DomainError;
use tracing::{debug, instrument};

use super::http_client::send_checked;

const SERVICE: &str = "official-updates";

/// Headlines scraped from the `<h2>` elements of a relief organisation's page.
///
/// The page is the same for every disaster; the identifier only scopes the
/// cache entry.
pub struct ScrapedOfficialUpdates {
    client: reqwest::Client,
    url: String,
    heading: Regex,
    tag: Regex,
}

impl ScrapedOfficialUpdates {
    pub fn new(client: reqwest::Client, url: &str) -> Result<Self, DomainError> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| DomainError::InvalidInput(format!("Bad pattern: {}", e)))
        };

        Ok(Self {
            client,
            url: url.to_string(),
            heading: compile(r"(?is)<h2\b[^>]*>(.*?)</h2\s*>")?,
            tag: compile(r"(?s)<[^>]*>")?,
        })
    }

    /// Text content of every `<h2>`, in document order. Headings that are
    /// empty once markup and surrounding whitespace are removed are skipped.
    pub fn extract_headings(&self, html: &str) -> Result<Vec<String>, DomainError> {
        let mut headings = Vec::new();

        for captures in self.heading.captures_iter(html) {
            let captures = captures.map_err(|e| DomainError::InvalidResponse {
                service: SERVICE.to_string(),
                message: e.to_string(),
            })?;
            let Some(inner) = captures.get(1) else {
                continue;
            };

            let text = decode_entities(&self.strip_tags(inner.as_str())?);
            let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
            if !text.is_empty() {
                headings.push(text);
            }
        }

        Ok(headings)
    }

    fn strip_tags(&self, fragment: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(fragment.len());
        let mut last = 0;

        for found in self.tag.find_iter(fragment) {
            let found = found.map_err(|e| DomainError::InvalidResponse {
                service: SERVICE.to_string(),
                message: e.to_string(),
            })?;
            out.push_str(&fragment[last..found.start()]);
            last = found.end();
        }
        out.push_str(&fragment[last..]);

        Ok(out)
    }
}

/// Longest entity body considered, `#x10FFFF` included.
const MAX_ENTITY_LEN: usize = 10;

/// Decodes numeric references and the named entities headlines actually use.
/// Anything unrecognised is left as written.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp + 1..];

        let decoded = tail
            .char_indices()
            .take(MAX_ENTITY_LEN + 1)
            .find(|&(_, c)| c == ';')
            .and_then(|(semi, _)| decode_entity(&tail[..semi]).map(|c| (c, semi)));

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }
    out.push_str(rest);

    out
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code).filter(|c| *c != '\0');
    }

    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "rsquo" => '\u{2019}',
        "lsquo" => '\u{2018}',
        "rdquo" => '\u{201d}',
        "ldquo" => '\u{201c}',
        "mdash" => '\u{2014}',
        "ndash" => '\u{2013}',
        "hellip" => '\u{2026}',
        "bull" => '\u{2022}',
        "middot" => '\u{b7}',
        "laquo" => '\u{ab}',
        "raquo" => '\u{bb}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        "trade" => '\u{2122}',
        "deg" => '\u{b0}',
        "eacute" => '\u{e9}',
        "aacute" => '\u{e1}',
        "iacute" => '\u{ed}',
        "oacute" => '\u{f3}',
        "uacute" => '\u{fa}',
        "ntilde" => '\u{f1}',
        _ => return None,
    };
    Some(c)
}

#[async_trait]
impl OfficialUpdatesSource for ScrapedOfficialUpdates {
    #[instrument(skip(self))]
    async fn fetch_updates(&self, disaster_id: &str) -> Result<Vec<String>, DomainError> {
        let response = send_checked(SERVICE, self.client.get(&self.url)).await?;

        let html = response
            .text()
            .await
            .map_err(|e| DomainError::ExternalService(format!("{} body read failed: {}", SERVICE, e)))?;

        let headings = self.extract_headings(&html)?;
        debug!(url = %self.url, count = headings.len(), "Official updates scraped");

        Ok(headings)
    }
}
