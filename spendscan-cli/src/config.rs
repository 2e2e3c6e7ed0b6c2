use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use spendscan_core::{CategoryRule, CategoryTable};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_spendscan_home, spendscan_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parse: ParseSection,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub categories: CategoriesSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseSection {
    /// Year for MM/DD rows; the current year when unset
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub format: OutputFormat,
    /// Accept inputs that yield zero transactions instead of failing
    pub allow_empty: bool,
    pub top_merchants: usize,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            allow_empty: false,
            top_merchants: 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriesSection {
    /// TOML file with `[[category]]` entries replacing the built-in table
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// On-disk shape of a custom category table
#[derive(Debug, Deserialize)]
struct CategoryFile {
    #[serde(default)]
    category: Vec<CategoryRule>,
}

pub fn config_path() -> Result<PathBuf> {
    Ok(spendscan_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config_to(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    ensure_spendscan_home()?;
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}

/// Category table from the configured file, or the built-in one.
pub fn category_table(cfg: &Config) -> Result<CategoryTable> {
    match &cfg.categories.file {
        Some(path) => load_category_file(path),
        None => Ok(CategoryTable::builtin()),
    }
}

pub fn load_category_file(p: &Path) -> Result<CategoryTable> {
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    let file: CategoryFile = toml::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
    if file.category.is_empty() {
        anyhow::bail!("{} defines no [[category]] entries", p.display());
    }
    Ok(CategoryTable::new(file.category))
}
