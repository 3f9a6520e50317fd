#![forbid(unsafe_code)]

//! Command-line argument parsing for the stockbook shell.
//!
//! Parses args manually (no external dependencies) to keep the binary
//! lean. Supports environment variable overrides via the `STOCKBOOK_*`
//! prefix; explicit flags win over environment variables.

use std::env;
use std::process;

use crate::i18n::Locale;
use crate::routes::PageId;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Stockbook — inventory and accounting shell for the terminal

USAGE:
    stockbook [OPTIONS]

OPTIONS:
    --route=PATH         Start on the section at PATH (default: /overview)
    --locale=TAG         Display language: 'zh', 'en', or 'ko' (default: zh)
    --screen-mode=MODE   Screen mode: 'alt' or 'inline' (default: alt)
    --ui-height=N        UI height in rows for inline mode (default: 20)
    --log-file=PATH      Append structured logs to PATH (default: off)
    --prefs-file=PATH    Persist the locale preference to PATH
    --inject-fault=PATH  Panic while rendering the section at PATH (testing)
    --help, -h           Show this help message
    --version, -V        Show version

SECTIONS:
    1  /overview         Landing page and section directory
    2  /inbound          Inbound (purchase) orders
    3  /outbound         Outbound (sales) orders
    4  /stock            Stock levels per warehouse
    5  /partners         Suppliers and customers
    6  /products         Product catalogue
    7  /product-prices   Price management
    8  /receivable       Accounts receivable
    9  /payable          Accounts payable
    0  /analysis         Statistics and analysis
       /report           Periodic reports

KEYBINDINGS:
    1-9, 0               Switch to sections 1-10 by number
    Tab / Shift+Tab      Cycle through all sections
    l                    Cycle display language (zh → en → ko)
    r                    Reload the shell after a section fault
    q / Ctrl+C           Quit

ENVIRONMENT VARIABLES:
    STOCKBOOK_ROUTE         Override --route
    STOCKBOOK_LOCALE        Override --locale (zh|en|ko)
    STOCKBOOK_SCREEN_MODE   Override --screen-mode (alt|inline)
    STOCKBOOK_UI_HEIGHT     Override --ui-height
    STOCKBOOK_LOG_FILE      Override --log-file
    STOCKBOOK_PREFS_FILE    Override --prefs-file
    STOCKBOOK_INJECT_FAULT  Override --inject-fault
    STOCKBOOK_LOG           Log filter directives (default: info)";

/// Parsed command-line options.
#[derive(Debug, Clone)]
pub struct Opts {
    /// Starting route path.
    pub route: String,
    /// Display language override (None keeps the persisted/default one).
    pub locale: Option<Locale>,
    /// Screen mode: "alt" or "inline".
    pub screen_mode: String,
    /// UI height for inline mode.
    pub ui_height: u16,
    /// Structured log destination (None disables logging).
    pub log_file: Option<String>,
    /// Locale preference file (None disables persistence).
    pub prefs_file: Option<String>,
    /// Page forced to panic during render.
    pub inject_fault: Option<PageId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseError {
    Help,
    Version,
    InvalidValue { flag: &'static str, value: String },
    UnknownArg(String),
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            route: "/overview".into(),
            locale: None,
            screen_mode: "alt".into(),
            ui_height: 20,
            log_file: None,
            prefs_file: None,
            inject_fault: None,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("stockbook {VERSION}");
                process::exit(0);
            }
            Err(ParseError::InvalidValue { flag, value }) => {
                eprintln!("Invalid {flag} value: {value}");
                process::exit(1);
            }
            Err(ParseError::UnknownArg(arg)) => {
                eprintln!("Unknown argument: {arg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = get_env("STOCKBOOK_ROUTE") {
            opts.route = val;
        }
        if let Some(val) = get_env("STOCKBOOK_LOCALE")
            && let Some(locale) = Locale::from_tag(&val)
        {
            opts.locale = Some(locale);
        }
        if let Some(val) = get_env("STOCKBOOK_SCREEN_MODE") {
            let lower = val.trim().to_ascii_lowercase();
            if lower == "alt" || lower == "inline" {
                opts.screen_mode = lower;
            }
        }
        if let Some(val) = get_env("STOCKBOOK_UI_HEIGHT")
            && let Ok(n) = val.parse()
        {
            opts.ui_height = n;
        }
        if let Some(val) = get_env("STOCKBOOK_LOG_FILE")
            && !val.trim().is_empty()
        {
            opts.log_file = Some(val);
        }
        if let Some(val) = get_env("STOCKBOOK_PREFS_FILE")
            && !val.trim().is_empty()
        {
            opts.prefs_file = Some(val);
        }
        if let Some(val) = get_env("STOCKBOOK_INJECT_FAULT")
            && let Some(page) = PageId::from_path(&val)
        {
            opts.inject_fault = Some(page);
        }

        // Parse command-line args (override env vars)
        let args: Vec<String> = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string())
            .collect();
        for arg in &args {
            match arg.as_str() {
                "--help" | "-h" => {
                    return Err(ParseError::Help);
                }
                "--version" | "-V" => {
                    return Err(ParseError::Version);
                }
                other => {
                    if let Some(val) = other.strip_prefix("--route=") {
                        opts.route = val.to_string();
                    } else if let Some(val) = other.strip_prefix("--locale=") {
                        match Locale::from_tag(val) {
                            Some(locale) => opts.locale = Some(locale),
                            None => {
                                return Err(ParseError::InvalidValue {
                                    flag: "--locale",
                                    value: val.to_string(),
                                });
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--screen-mode=") {
                        let lower = val.to_ascii_lowercase();
                        match lower.as_str() {
                            "alt" | "inline" => opts.screen_mode = lower,
                            _ => {
                                return Err(ParseError::InvalidValue {
                                    flag: "--screen-mode",
                                    value: val.to_string(),
                                });
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--ui-height=") {
                        match val.parse() {
                            Ok(n) => opts.ui_height = n,
                            Err(_) => {
                                return Err(ParseError::InvalidValue {
                                    flag: "--ui-height",
                                    value: val.to_string(),
                                });
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--log-file=") {
                        if !val.trim().is_empty() {
                            opts.log_file = Some(val.to_string());
                        }
                    } else if let Some(val) = other.strip_prefix("--prefs-file=") {
                        if !val.trim().is_empty() {
                            opts.prefs_file = Some(val.to_string());
                        }
                    } else if let Some(val) = other.strip_prefix("--inject-fault=") {
                        match PageId::from_path(val) {
                            Some(page) => opts.inject_fault = Some(page),
                            None => {
                                return Err(ParseError::InvalidValue {
                                    flag: "--inject-fault",
                                    value: val.to_string(),
                                });
                            }
                        }
                    } else {
                        return Err(ParseError::UnknownArg(other.to_string()));
                    }
                }
            }
        }

        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_with_env<I, S>(
        args: I,
        env_pairs: &[(&'static str, &'static str)],
    ) -> Result<Opts, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = std::collections::HashMap::new();
        for (key, value) in env_pairs {
            map.insert(*key, *value);
        }
        Opts::parse_from_env_and_args(args, |key| map.get(key).map(|value| (*value).to_string()))
    }

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.route, "/overview");
        assert!(opts.locale.is_none());
        assert_eq!(opts.screen_mode, "alt");
        assert_eq!(opts.ui_height, 20);
        assert!(opts.log_file.is_none());
        assert!(opts.prefs_file.is_none());
        assert!(opts.inject_fault.is_none());
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn help_text_lists_every_section_path() {
        for page in PageId::ALL {
            assert!(
                HELP_TEXT.contains(page.path()),
                "HELP_TEXT missing {}",
                page.path()
            );
        }
    }

    #[test]
    fn help_text_contains_env_vars() {
        assert!(HELP_TEXT.contains("STOCKBOOK_ROUTE"));
        assert!(HELP_TEXT.contains("STOCKBOOK_LOCALE"));
        assert!(HELP_TEXT.contains("STOCKBOOK_SCREEN_MODE"));
        assert!(HELP_TEXT.contains("STOCKBOOK_UI_HEIGHT"));
        assert!(HELP_TEXT.contains("STOCKBOOK_LOG_FILE"));
        assert!(HELP_TEXT.contains("STOCKBOOK_PREFS_FILE"));
        assert!(HELP_TEXT.contains("STOCKBOOK_INJECT_FAULT"));
        assert!(HELP_TEXT.contains("STOCKBOOK_LOG"));
    }

    #[test]
    fn env_overrides_apply() {
        let env = [
            ("STOCKBOOK_ROUTE", "/stock"),
            ("STOCKBOOK_LOCALE", "ko"),
            ("STOCKBOOK_SCREEN_MODE", "inline"),
            ("STOCKBOOK_UI_HEIGHT", "24"),
        ];
        let opts = parse_with_env(Vec::<String>::new(), &env).expect("parse");
        assert_eq!(opts.route, "/stock");
        assert_eq!(opts.locale, Some(Locale::Ko));
        assert_eq!(opts.screen_mode, "inline");
        assert_eq!(opts.ui_height, 24);
    }

    #[test]
    fn args_override_env() {
        let opts = parse_with_env(
            ["--route=/partners", "--locale=en"],
            &[("STOCKBOOK_ROUTE", "/stock"), ("STOCKBOOK_LOCALE", "ko")],
        )
        .expect("parse");
        assert_eq!(opts.route, "/partners");
        assert_eq!(opts.locale, Some(Locale::En));
    }

    #[test]
    fn invalid_locale_reports_flag() {
        let err = parse_with_env(["--locale=fr"], &[]);
        assert!(
            matches!(
                err,
                Err(ParseError::InvalidValue {
                    flag: "--locale",
                    ..
                })
            ),
            "expected InvalidValue for --locale=fr, got {err:?}"
        );
    }

    #[test]
    fn invalid_screen_mode_reports_flag() {
        let err = parse_with_env(["--screen-mode=fullscreen"], &[]);
        assert!(matches!(
            err,
            Err(ParseError::InvalidValue {
                flag: "--screen-mode",
                ..
            })
        ));
    }

    #[test]
    fn invalid_ui_height_reports_flag() {
        let err = parse_with_env(["--ui-height=tall"], &[]);
        assert!(matches!(
            err,
            Err(ParseError::InvalidValue {
                flag: "--ui-height",
                ..
            })
        ));
    }

    #[test]
    fn inject_fault_takes_a_known_path() {
        let opts = parse_with_env(["--inject-fault=/stock"], &[]).expect("parse");
        assert_eq!(opts.inject_fault, Some(PageId::Stock));
    }

    #[test]
    fn inject_fault_rejects_unknown_path() {
        let err = parse_with_env(["--inject-fault=/nope"], &[]);
        assert!(matches!(
            err,
            Err(ParseError::InvalidValue {
                flag: "--inject-fault",
                ..
            })
        ));
    }

    #[test]
    fn unknown_arg_reports_error() {
        let err = parse_with_env(["--mystery-flag"], &[]);
        assert!(matches!(err, Err(ParseError::UnknownArg(ref arg)) if arg == "--mystery-flag"));
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(
            parse_with_env(["--help"], &[]).unwrap_err(),
            ParseError::Help
        );
        assert_eq!(
            parse_with_env(["-V"], &[]).unwrap_err(),
            ParseError::Version
        );
    }

    #[test]
    fn env_with_bad_values_is_ignored() {
        let env = [
            ("STOCKBOOK_LOCALE", "fr"),
            ("STOCKBOOK_SCREEN_MODE", "fullscreen"),
            ("STOCKBOOK_UI_HEIGHT", "tall"),
            ("STOCKBOOK_INJECT_FAULT", "/nope"),
        ];
        let opts = parse_with_env(Vec::<String>::new(), &env).expect("parse");
        assert!(opts.locale.is_none());
        assert_eq!(opts.screen_mode, "alt");
        assert_eq!(opts.ui_height, 20);
        assert!(opts.inject_fault.is_none());
    }
}
