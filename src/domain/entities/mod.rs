//! Domain entity definitions.

mod package;
mod setting;

pub use package::{PackageCard, PackageStatus, PackageTab};
pub use setting::{SettingKind, SettingRow};
