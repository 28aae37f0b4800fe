//! Edit scripts: a mask, a list of edits and the expected commit after each.
//!
//! ```toml
//! format = "maskedit-script-v1"
//!
//! [[cases]]
//! name = "paste-then-backspace"
//! mask = "+7 (___) ___-__-__"
//!
//! [[cases.steps]]
//! op = "paste"
//! text = "123"
//! start = 4
//! expect = "+7 (123) ___-__-__@9"
//! ```
//!
//! The same structure is accepted as JSON (`.json` extension).

use crate::SCRIPT_FORMAT_V1;
use crate::snapshot::{format_state, parse_expect};
use mask_core::{
    Direction, Edit, InputState, MaskConfig, MaskError, MaskedInput, PasteSelection,
    SelectionRange, hook::strip_leading_digit,
};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ScriptError {
    Io { path: PathBuf, source: std::io::Error },
    Toml { path: PathBuf, source: toml::de::Error },
    Json { path: PathBuf, source: serde_json::Error },
    UnsupportedFormat { path: PathBuf, format: String },
    InvalidMask { case: String, source: MaskError },
    InvalidStep { case: String, step: usize, reason: String },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Io { path, source } => {
                write!(f, "failed to read script {}: {source}", path.display())
            }
            ScriptError::Toml { path, source } => {
                write!(f, "failed to parse TOML script {}: {source}", path.display())
            }
            ScriptError::Json { path, source } => {
                write!(f, "failed to parse JSON script {}: {source}", path.display())
            }
            ScriptError::UnsupportedFormat { path, format } => write!(
                f,
                "unsupported script format {format:?} in {} (expected {SCRIPT_FORMAT_V1:?})",
                path.display()
            ),
            ScriptError::InvalidMask { case, source } => {
                write!(f, "case '{case}': {source}")
            }
            ScriptError::InvalidStep { case, step, reason } => {
                write!(f, "case '{case}' step {step}: {reason}")
            }
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Io { source, .. } => Some(source),
            ScriptError::Toml { source, .. } => Some(source),
            ScriptError::Json { source, .. } => Some(source),
            ScriptError::InvalidMask { source, .. } => Some(source),
            ScriptError::UnsupportedFormat { .. } | ScriptError::InvalidStep { .. } => None,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Script {
    pub format: String,
    pub cases: Vec<ScriptCase>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    #[default]
    Active,
    Xfail,
    Skip,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScriptCase {
    pub name: String,
    pub mask: String,
    #[serde(default)]
    pub placeholder: Option<char>,
    #[serde(default)]
    pub paste_selection: PasteSelection,
    #[serde(default)]
    pub hook: Option<HookSpec>,
    #[serde(default)]
    pub status: CaseStatus,
    #[serde(default)]
    pub reason: Option<String>,
    pub steps: Vec<Step>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum HookSpec {
    /// See [`mask_core::hook::strip_leading_digit`]. `caret` defaults to the
    /// template end.
    StripLeadingDigit {
        leading: String,
        full_len: usize,
        #[serde(default)]
        caret: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepOp {
    Type,
    Backspace,
    Delete,
    Paste,
    Reset,
}

impl StepOp {
    pub fn name(self) -> &'static str {
        match self {
            StepOp::Type => "type",
            StepOp::Backspace => "backspace",
            StepOp::Delete => "delete",
            StepOp::Paste => "paste",
            StepOp::Reset => "reset",
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Step {
    pub op: StepOp,
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub caret: Option<usize>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
    pub expect: String,
}

impl Step {
    /// Turn the step into an engine edit. Missing carets default to the
    /// field's current caret.
    pub fn to_edit(&self, current: &InputState) -> Result<Edit, String> {
        let caret = self.caret.unwrap_or(current.caret());
        Ok(match self.op {
            StepOp::Type => Edit::Insert {
                raw: self
                    .raw
                    .clone()
                    .ok_or_else(|| "type step needs `raw`".to_string())?,
                caret,
            },
            StepOp::Backspace => Edit::Delete {
                direction: Direction::Backward,
                caret,
            },
            StepOp::Delete => Edit::Delete {
                direction: Direction::Forward,
                caret,
            },
            StepOp::Paste => {
                let start = self.start.unwrap_or(caret);
                Edit::Paste {
                    text: self
                        .text
                        .clone()
                        .ok_or_else(|| "paste step needs `text`".to_string())?,
                    selection: SelectionRange::new(start, self.end.unwrap_or(start)),
                }
            }
            StepOp::Reset => Edit::Reset,
        })
    }
}

impl ScriptCase {
    pub fn config(&self) -> MaskConfig {
        let mut config = MaskConfig::new(self.mask.clone()).paste_selection(self.paste_selection);
        if let Some(placeholder) = self.placeholder {
            config = config.placeholder_char(placeholder);
        }
        config
    }

    /// Build the field this case runs against, hook included.
    pub fn build_field(&self) -> Result<MaskedInput, ScriptError> {
        let field = MaskedInput::new(self.config()).map_err(|source| ScriptError::InvalidMask {
            case: self.name.clone(),
            source,
        })?;
        Ok(match &self.hook {
            None => field,
            Some(HookSpec::StripLeadingDigit {
                leading,
                full_len,
                caret,
            }) => {
                let leading: Vec<char> = leading.chars().collect();
                let caret = caret.unwrap_or(field.mask().len());
                let hook = strip_leading_digit(field.mask().prefix(), &leading, *full_len, caret);
                field.with_hook(hook)
            }
        })
    }

    /// Expected snapshot lines, one per step.
    pub fn expected_lines(&self) -> Result<Vec<String>, ScriptError> {
        self.steps
            .iter()
            .enumerate()
            .map(|(idx, step)| {
                let state = parse_expect(&step.expect).ok_or_else(|| ScriptError::InvalidStep {
                    case: self.name.clone(),
                    step: idx + 1,
                    reason: format!("malformed expect {:?}, want `value@caret`", step.expect),
                })?;
                Ok(step_line(step.op, &state))
            })
            .collect()
    }

    /// Replay every step and return the snapshot line after each commit.
    pub fn run(&self) -> Result<Vec<String>, ScriptError> {
        let mut field = self.build_field()?;
        let mut lines = Vec::with_capacity(self.steps.len());
        for (idx, step) in self.steps.iter().enumerate() {
            let edit = step
                .to_edit(field.state())
                .map_err(|reason| ScriptError::InvalidStep {
                    case: self.name.clone(),
                    step: idx + 1,
                    reason,
                })?;
            let state = field.apply(edit);
            lines.push(step_line(step.op, state));
        }
        Ok(lines)
    }
}

fn step_line(op: StepOp, state: &InputState) -> String {
    format!("{:<9} {}", op.name(), format_state(state))
}

/// Parse a script from TOML text. `origin` is only used in error messages.
pub fn parse_toml(content: &str, origin: &Path) -> Result<Script, ScriptError> {
    let script: Script = toml::from_str(content).map_err(|source| ScriptError::Toml {
        path: origin.to_path_buf(),
        source,
    })?;
    check_format(script, origin)
}

/// Parse a script from JSON text. `origin` is only used in error messages.
pub fn parse_json(content: &str, origin: &Path) -> Result<Script, ScriptError> {
    let script: Script = serde_json::from_str(content).map_err(|source| ScriptError::Json {
        path: origin.to_path_buf(),
        source,
    })?;
    check_format(script, origin)
}

/// Load a script file; `.json` files are read as JSON, everything else as TOML.
pub fn load_script(path: &Path) -> Result<Script, ScriptError> {
    let content = fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&content, path),
        _ => parse_toml(&content, path),
    }
}

/// All `.toml` / `.json` scripts in `dir`, sorted by file name.
pub fn script_paths(dir: &Path) -> Result<Vec<PathBuf>, ScriptError> {
    let entries = fs::read_dir(dir).map_err(|source| ScriptError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| ScriptError::Io {
                path: dir.to_path_buf(),
                source,
            })?
            .path();
        if matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("toml") | Some("json")
        ) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn check_format(script: Script, origin: &Path) -> Result<Script, ScriptError> {
    if script.format != SCRIPT_FORMAT_V1 {
        return Err(ScriptError::UnsupportedFormat {
            path: origin.to_path_buf(),
            format: script.format,
        });
    }
    Ok(script)
}
