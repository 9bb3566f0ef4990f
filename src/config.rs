// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

/// Front-end sources that contain `type="number"` inputs, relative to the
/// project root.
pub const DEFAULT_FILES: &[&str] = &[
    "src/pages/dosen/PenilaianPage.tsx",
    "src/pages/laboran/InventarisPage.tsx",
    "src/pages/laboran/LaboratoriumPage.tsx",
    "src/pages/admin/LaboratoriesPage.tsx",
    "src/pages/admin/EquipmentsPage.tsx",
    "src/pages/laboran/PeminjamanAktifPage.tsx",
    "src/pages/mahasiswa/NilaiPage.tsx",
    "src/components/features/penilaian/PermintaanPerbaikanTab.tsx",
];

#[derive(Clone, Copy, Debug)]
pub struct FixConfig<'a> {
    /// Directory the entries of `files` are resolved against.
    pub root: &'a Path,
    /// Files to process, in reporting order. A file listed more than once is
    /// processed and reported once.
    pub files: &'a [&'a str],
}

impl Default for FixConfig<'_> {
    fn default() -> Self {
        FixConfig {
            root: Path::new("."),
            files: DEFAULT_FILES,
        }
    }
}

impl FixConfig<'_> {
    /// Returns the path of `file` under `root`.
    pub fn resolve(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = FixConfig::default();
        assert_eq!(cfg.files.len(), 8);
        assert!(cfg.files.iter().all(|f| f.ends_with(".tsx")));
        assert_eq!(
            cfg.resolve("src/pages/mahasiswa/NilaiPage.tsx"),
            Path::new("./src/pages/mahasiswa/NilaiPage.tsx")
        );
    }
}
