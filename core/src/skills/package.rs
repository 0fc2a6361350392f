use super::skill_dir;
use crate::error::{Result, SkillError};
use chrono::{Datelike, Local, Timelike};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    pub archive: PathBuf,
    /// Entry names in the order they were written.
    pub entries: Vec<String>,
}

/// `<name>.zip`, next to the skill directory under `root`.
pub fn archive_path(root: &Path, name: &str) -> PathBuf {
    root.join(format!("{}.zip", name))
}

/// Writes every file under `root/name` into `root/<name>.zip`.
///
/// Entries keep the skill name as their leading component (`name/SKILL.md`,
/// `name/assets/logo.png`). An existing archive is truncated. If writing
/// fails part-way the partial archive is left on disk.
pub fn package(root: &Path, name: &str) -> Result<PackageReport> {
    let dir = skill_dir(root, name)?;
    if !dir.is_dir() {
        return Err(SkillError::NotFound(dir));
    }

    let archive = archive_path(root, name);
    let file = File::create(&archive).map_err(|e| SkillError::io(&archive, e))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let mut entries = Vec::new();

    for entry in WalkDir::new(&dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type().is_dir() || path == archive {
            continue;
        }

        // Follows links, so a dangling one fails here.
        let metadata = fs::metadata(path).map_err(|e| SkillError::io(path, e))?;
        if metadata.is_dir() {
            continue;
        }

        let rel = path.strip_prefix(&dir).unwrap_or(path);
        let entry_name = archive_entry_name(&Path::new(name).join(rel));

        zip.start_file(entry_name.as_str(), entry_options(&metadata))?;

        let mut source = File::open(path).map_err(|e| SkillError::io(path, e))?;
        io::copy(&mut source, &mut zip).map_err(|source| SkillError::Copy {
            from: path.to_path_buf(),
            into: archive.clone(),
            source,
        })?;

        tracing::debug!(entry = %entry_name, bytes = metadata.len(), "Archived file");
        entries.push(entry_name);
    }

    let mut writer = zip.finish()?;
    io::Write::flush(&mut writer).map_err(|e| SkillError::io(&archive, e))?;

    tracing::info!(
        skill = name,
        entries = entries.len(),
        archive = %archive.display(),
        "Skill packaged"
    );

    Ok(PackageReport { archive, entries })
}

/// Normalises a path into a zip entry name: `/` separators, no root or `.`
/// components, and `dir/..` pairs collapsed.
pub(crate) fn archive_entry_name(path: &Path) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut absolute = false;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => absolute = true,
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(last) if last != ".." => {
                    parts.pop();
                }
                _ if absolute => {}
                _ => parts.push("..".to_string()),
            },
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
        }
    }

    parts.join("/")
}

fn entry_options(metadata: &fs::Metadata) -> SimpleFileOptions {
    let mut options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    if let Some(modified) = metadata.modified().ok().and_then(zip_timestamp) {
        options = options.last_modified_time(modified);
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        options = options.unix_permissions(metadata.permissions().mode());
    }

    options
}

/// Zip timestamps cannot represent dates before 1980; those fall back to the
/// format's default.
fn zip_timestamp(time: std::time::SystemTime) -> Option<DateTime> {
    let local: chrono::DateTime<Local> = time.into();
    let year = u16::try_from(local.year()).ok()?;

    DateTime::from_date_and_time(
        year,
        local.month() as u8,
        local.day() as u8,
        local.hour() as u8,
        local.minute() as u8,
        local.second() as u8,
    )
    .ok()
}
