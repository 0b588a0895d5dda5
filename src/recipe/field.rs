// src/recipe/field.rs

//! Known PKGBUILD variable and function names

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A PKGBUILD metadata variable the parser extracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Pkgname,
    Pkgbase,
    Epoch,
    Pkgver,
    Pkgrel,
    Pkgdesc,
    Url,
    Arch,
    License,
    Groups,
    Depends,
    Makedepends,
    Checkdepends,
    Optdepends,
    Provides,
    Conflicts,
    Replaces,
    Backup,
    Source,
    Md5sums,
    Sha1sums,
    Sha256sums,
    Sha512sums,
    B2sums,
}

impl Field {
    /// Every known field, in the order they are extracted
    pub const ALL: [Field; 24] = [
        Field::Pkgname,
        Field::Pkgbase,
        Field::Epoch,
        Field::Pkgver,
        Field::Pkgrel,
        Field::Pkgdesc,
        Field::Url,
        Field::Arch,
        Field::License,
        Field::Groups,
        Field::Depends,
        Field::Makedepends,
        Field::Checkdepends,
        Field::Optdepends,
        Field::Provides,
        Field::Conflicts,
        Field::Replaces,
        Field::Backup,
        Field::Source,
        Field::Md5sums,
        Field::Sha1sums,
        Field::Sha256sums,
        Field::Sha512sums,
        Field::B2sums,
    ];

    /// The shell variable name as written in a PKGBUILD
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Pkgname => "pkgname",
            Field::Pkgbase => "pkgbase",
            Field::Epoch => "epoch",
            Field::Pkgver => "pkgver",
            Field::Pkgrel => "pkgrel",
            Field::Pkgdesc => "pkgdesc",
            Field::Url => "url",
            Field::Arch => "arch",
            Field::License => "license",
            Field::Groups => "groups",
            Field::Depends => "depends",
            Field::Makedepends => "makedepends",
            Field::Checkdepends => "checkdepends",
            Field::Optdepends => "optdepends",
            Field::Provides => "provides",
            Field::Conflicts => "conflicts",
            Field::Replaces => "replaces",
            Field::Backup => "backup",
            Field::Source => "source",
            Field::Md5sums => "md5sums",
            Field::Sha1sums => "sha1sums",
            Field::Sha256sums => "sha256sums",
            Field::Sha512sums => "sha512sums",
            Field::B2sums => "b2sums",
        }
    }

    /// Whether this field holds integrity checksums for `source`
    pub fn is_checksum(&self) -> bool {
        matches!(
            self,
            Field::Md5sums | Field::Sha1sums | Field::Sha256sums | Field::Sha512sums | Field::B2sums
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| Error::ParseError(format!("Unknown PKGBUILD field: {}", s)))
    }
}

/// A PKGBUILD shell function the parser extracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Function {
    Prepare,
    Build,
    Check,
    Package,
    /// Version generation for VCS packages
    Pkgver,
}

impl Function {
    pub const ALL: [Function; 5] = [
        Function::Prepare,
        Function::Build,
        Function::Check,
        Function::Package,
        Function::Pkgver,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Function::Prepare => "prepare",
            Function::Build => "build",
            Function::Check => "check",
            Function::Package => "package",
            Function::Pkgver => "pkgver",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Function {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Function::ALL
            .into_iter()
            .find(|func| func.as_str() == s)
            .ok_or_else(|| Error::ParseError(format!("Unknown PKGBUILD function: {}", s)))
    }
}
