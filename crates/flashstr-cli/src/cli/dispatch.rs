//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use flashstr::Addr;

use super::ObjectKind;
use crate::commands::dump::DumpArgs;
use crate::commands::info::InfoArgs;

pub struct InfoParams {
    pub image_path: PathBuf,
    pub addr: Addr,
}

impl InfoParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            image_path: required::<PathBuf>(m, "image_path"),
            addr: required::<Addr>(m, "addr"),
        }
    }
}

impl From<InfoParams> for InfoArgs {
    fn from(p: InfoParams) -> Self {
        Self {
            image_path: p.image_path,
            addr: p.addr,
        }
    }
}

pub struct DumpParams {
    pub image_path: PathBuf,
    pub addr: Addr,
    pub kind: ObjectKind,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            image_path: required::<PathBuf>(m, "image_path"),
            addr: required::<Addr>(m, "addr"),
            kind: required::<ObjectKind>(m, "kind"),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            image_path: p.image_path,
            addr: p.addr,
            kind: p.kind,
        }
    }
}

/// Required and defaulted args are always present after parsing.
fn required<T: Clone + Send + Sync + 'static>(m: &ArgMatches, id: &str) -> T {
    m.get_one::<T>(id)
        .cloned()
        .unwrap_or_else(|| unreachable!("clap should have required {id}"))
}
