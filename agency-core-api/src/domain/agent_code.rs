use heapless::String as HeaplessString;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{ApiError, ApiResult};

/// Maximum number of bytes an agent code may occupy
pub const AGENT_CODE_MAX_LEN: usize = 32;

/// Root codes carry exactly three digits, so 999 is the last root sequence
pub const MAX_ROOT_SEQUENCE: u32 = 999;

/// Deepest level an agent may occupy in the referral hierarchy
pub const MAX_LEVEL: u8 = 3;

const ROOT_PREFIX: &str = "AG";
const SEGMENT_SEPARATOR: char = '-';

static AGENT_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^AG[0-9]{3}(-[0-9]+)*$").expect("agent code pattern is valid"));

/// Returns true when `code` is a well-formed agent code.
///
/// A code is `AG` followed by exactly three digits and zero or more
/// `-<digits>` groups, e.g. `AG001`, `AG001-1`, `AG001-12-3`.
pub fn is_valid_code(code: &str) -> bool {
    AGENT_CODE_PATTERN.is_match(code)
}

/// Hierarchical agent code.
///
/// The number of hyphen separated segments equals the level of the agent
/// owning the code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AgentCode(HeaplessString<AGENT_CODE_MAX_LEN>);

impl AgentCode {
    /// Parses and validates a code
    pub fn parse(code: &str) -> ApiResult<Self> {
        if !is_valid_code(code) {
            return Err(ApiError::InvalidArgument(format!(
                "Malformed agent code: '{code}'"
            )));
        }
        if code
            .split(SEGMENT_SEPARATOR)
            .skip(1)
            .any(|segment| segment.parse::<u32>().is_err())
        {
            return Err(ApiError::InvalidArgument(format!(
                "Agent code sequence out of range: '{code}'"
            )));
        }
        let inner = HeaplessString::try_from(code).map_err(|_| {
            ApiError::InvalidArgument(format!(
                "Agent code '{code}' exceeds {AGENT_CODE_MAX_LEN} characters"
            ))
        })?;
        Ok(Self(inner))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Hierarchy level encoded by the code (number of segments)
    pub fn level(&self) -> u8 {
        let segments = self.as_str().split(SEGMENT_SEPARATOR).count();
        u8::try_from(segments).unwrap_or(u8::MAX)
    }

    pub fn is_root(&self) -> bool {
        !self.as_str().contains(SEGMENT_SEPARATOR)
    }

    /// Code of the parent agent, `None` for a root code
    pub fn parent(&self) -> Option<AgentCode> {
        let (prefix, _) = self.as_str().rsplit_once(SEGMENT_SEPARATOR)?;
        HeaplessString::try_from(prefix).ok().map(AgentCode)
    }

    /// Sequence number of the last segment (`AG007` -> 7, `AG001-12` -> 12)
    pub fn sequence(&self) -> u32 {
        let code = self.as_str();
        let last = match code.rsplit_once(SEGMENT_SEPARATOR) {
            Some((_, segment)) => segment,
            None => &code[ROOT_PREFIX.len()..],
        };
        last.parse().unwrap_or(0)
    }
}

impl fmt::Display for AgentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentCode {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentCode::parse(s)
    }
}

impl TryFrom<String> for AgentCode {
    type Error = ApiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AgentCode::parse(&value)
    }
}

impl From<AgentCode> for String {
    fn from(code: AgentCode) -> Self {
        code.as_str().to_string()
    }
}

/// Derives the code for a new agent.
///
/// Root codes are `AG` plus the sequence zero-padded to three digits; child
/// codes append `-<sequence>` to the parent code without padding.
pub fn generate_code(parent_code: Option<&AgentCode>, sequence: u32) -> ApiResult<AgentCode> {
    if sequence == 0 {
        return Err(ApiError::InvalidArgument(
            "Agent code sequence must be a positive integer".to_string(),
        ));
    }

    let code = match parent_code {
        None => {
            if sequence > MAX_ROOT_SEQUENCE {
                return Err(ApiError::InvalidArgument(format!(
                    "Root agent sequence {sequence} exceeds {MAX_ROOT_SEQUENCE}"
                )));
            }
            format!("{ROOT_PREFIX}{sequence:03}")
        }
        Some(parent) => format!("{parent}{SEGMENT_SEPARATOR}{sequence}"),
    };

    AgentCode::parse(&code)
}
