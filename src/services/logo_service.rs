//! Logo service - Rewrites and lists party logo paths.
//!
//! Both operations write a human-readable report to the supplied writer as
//! they go, so output already produced survives a later failure.

use std::io::Write;
use std::sync::Arc;

use crate::domain::{LogoChange, LogoMapping, Party, UpdateSummary};
use crate::errors::AppResult;
use crate::infra::PartyRepository;

/// Width of the `=` rule framing report sections
const RULE_WIDTH: usize = 70;

/// Shown in place of a missing or empty logo path
pub const NO_LOGO_PLACEHOLDER: &str = "(no logo)";

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn display_path(path: Option<&str>) -> &str {
    match path {
        Some(p) if !p.is_empty() => p,
        _ => NO_LOGO_PLACEHOLDER,
    }
}

/// Applies a logo mapping to the parties stored in the database.
pub struct LogoMaintainer<R: PartyRepository + ?Sized> {
    repo: Arc<R>,
    mapping: LogoMapping,
}

impl<R: PartyRepository + ?Sized> LogoMaintainer<R> {
    pub fn new(repo: Arc<R>, mapping: LogoMapping) -> Self {
        Self { repo, mapping }
    }

    /// Reassign logo paths for every party named in the mapping.
    ///
    /// All assignments are committed together; when the database has no
    /// parties nothing is written at all.
    pub async fn update_logo_paths<W: Write>(&self, out: &mut W) -> AppResult<UpdateSummary> {
        writeln!(out, "Updating political party logo paths...\n")?;

        let parties = self.repo.list().await?;
        tracing::debug!(count = parties.len(), "Parties fetched");

        if parties.is_empty() {
            writeln!(out, "❌ No parties found in the database.")?;
            writeln!(out, "   Run the database initialization script first.\n")?;
            return Ok(UpdateSummary::default());
        }

        let mut summary = UpdateSummary {
            examined: parties.len(),
            ..UpdateSummary::default()
        };
        let mut changes = Vec::new();

        for party in parties {
            match self.mapping.get(&party.name) {
                Some(new_path) => {
                    writeln!(out, "✓ {}", party.name)?;
                    writeln!(out, "  Previous: {}", display_path(party.logo.as_deref()))?;
                    writeln!(out, "  New:      {}\n", new_path)?;

                    changes.push(LogoChange {
                        party_id: party.id,
                        new_path: new_path.to_string(),
                        old_path: party.logo,
                        name: party.name,
                    });
                    summary.updated += 1;
                }
                None => {
                    writeln!(out, "⚠ Party '{}' not found in the mapping", party.name)?;
                    summary.unmatched.push(party.name);
                }
            }
        }

        self.repo.save_logo_changes(changes).await?;
        tracing::info!(
            updated = summary.updated,
            examined = summary.examined,
            unmatched = summary.unmatched.len(),
            "Logo paths committed"
        );

        writeln!(out, "{}", rule())?;
        writeln!(
            out,
            "✓ Logo paths updated: {} of {}",
            summary.updated, summary.examined
        )?;
        writeln!(out, "{}", rule())?;
        writeln!(out, "\nIMPORTANT:")?;
        writeln!(out, "  - Make sure the image files exist at the paths listed above")?;
        writeln!(out, "  - Restart the web server to see the changes")?;
        writeln!(out, "{}\n", rule())?;

        Ok(summary)
    }

    /// Print a numbered listing of every party and its current logo path.
    ///
    /// Read-only. Returns the parties that were listed.
    pub async fn show_current_logos<W: Write>(&self, out: &mut W) -> AppResult<Vec<Party>> {
        writeln!(out, "{}", rule())?;
        writeln!(out, "CURRENT PARTY LOGOS IN THE DATABASE")?;
        writeln!(out, "{}\n", rule())?;

        let parties = self.repo.list().await?;

        if parties.is_empty() {
            writeln!(out, "❌ No parties found in the database.\n")?;
            return Ok(parties);
        }

        for (i, party) in parties.iter().enumerate() {
            writeln!(out, "{:2}. {}", i + 1, party.name)?;
            writeln!(out, "    Logo: {}\n", display_path(party.logo_path()))?;
        }

        writeln!(out, "{}\n", rule())?;
        Ok(parties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::default_logo_mapping;
    use crate::errors::AppError;
    use crate::infra::MockPartyRepository;

    fn party(id: i32, name: &str, logo: Option<&str>) -> Party {
        Party {
            id,
            name: name.to_string(),
            logo: logo.map(str::to_string),
        }
    }

    fn maintainer(repo: MockPartyRepository) -> LogoMaintainer<MockPartyRepository> {
        LogoMaintainer::new(Arc::new(repo), default_logo_mapping())
    }

    fn rendered(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_update_empty_database_skips_commit() {
        let mut repo = MockPartyRepository::new();
        repo.expect_list().times(1).returning(|| Ok(vec![]));
        repo.expect_save_logo_changes().times(0);

        let mut out = Vec::new();
        let summary = maintainer(repo).update_logo_paths(&mut out).await.unwrap();

        assert_eq!(summary, UpdateSummary::default());
        let text = rendered(out);
        assert!(text.contains("No parties found"));
        assert!(text.contains("initialization script"));
    }

    #[tokio::test]
    async fn test_update_single_mapped_party() {
        let mut repo = MockPartyRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![party(8, "Perú Libre", Some("old/peru.png"))]));
        repo.expect_save_logo_changes()
            .withf(|changes| {
                changes
                    == &vec![LogoChange {
                        party_id: 8,
                        name: "Perú Libre".to_string(),
                        old_path: Some("old/peru.png".to_string()),
                        new_path: "static/logos/peru_libre.png".to_string(),
                    }]
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut out = Vec::new();
        let summary = maintainer(repo).update_logo_paths(&mut out).await.unwrap();

        assert_eq!(summary.updated, 1);
        assert_eq!(summary.examined, 1);
        assert!(summary.unmatched.is_empty());

        let text = rendered(out);
        assert!(text.contains("✓ Perú Libre"));
        assert!(text.contains("  Previous: old/peru.png"));
        assert!(text.contains("  New:      static/logos/peru_libre.png"));
        assert!(text.contains("Logo paths updated: 1 of 1"));
    }

    #[tokio::test]
    async fn test_update_unmapped_party_left_unchanged() {
        let mut repo = MockPartyRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![party(3, "Partido Inventado", Some("keep.png"))]));
        repo.expect_save_logo_changes()
            .withf(|changes| changes.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let mut out = Vec::new();
        let summary = maintainer(repo).update_logo_paths(&mut out).await.unwrap();

        assert_eq!(summary.updated, 0);
        assert_eq!(summary.examined, 1);
        assert_eq!(summary.unmatched, vec!["Partido Inventado".to_string()]);
        assert!(rendered(out).contains("⚠ Party 'Partido Inventado' not found in the mapping"));
    }

    #[tokio::test]
    async fn test_update_mixed_parties_in_fetch_order() {
        let mut repo = MockPartyRepository::new();
        repo.expect_list().returning(|| {
            Ok(vec![
                party(1, "Fuerza Popular", None),
                party(2, "perú libre", None),
                party(3, "Alianza Popular", Some("")),
            ])
        });
        repo.expect_save_logo_changes()
            .withf(|changes| {
                changes.iter().map(|c| c.party_id).collect::<Vec<_>>() == vec![1, 3]
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut out = Vec::new();
        let summary = maintainer(repo).update_logo_paths(&mut out).await.unwrap();

        assert_eq!(summary.updated, 2);
        assert_eq!(summary.examined, 3);
        assert_eq!(summary.unmatched, vec!["perú libre".to_string()]);

        let text = rendered(out);
        let fuerza = text.find("✓ Fuerza Popular").unwrap();
        let unmatched = text.find("⚠ Party 'perú libre'").unwrap();
        let alianza = text.find("✓ Alianza Popular").unwrap();
        assert!(fuerza < unmatched && unmatched < alianza);
        assert!(text.contains(&format!("  Previous: {}", NO_LOGO_PLACEHOLDER)));
        assert!(text.contains("Logo paths updated: 2 of 3"));
    }

    #[tokio::test]
    async fn test_update_with_injected_mapping() {
        let mut repo = MockPartyRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![party(5, "Nuevo Partido", None)]));
        repo.expect_save_logo_changes()
            .withf(|changes| changes.len() == 1 && changes[0].new_path == "custom/nuevo.svg")
            .times(1)
            .returning(|_| Ok(()));

        let mapping = LogoMapping::new().with("Nuevo Partido", "custom/nuevo.svg");
        let service = LogoMaintainer::new(Arc::new(repo), mapping);

        let mut out = Vec::new();
        let summary = service.update_logo_paths(&mut out).await.unwrap();
        assert_eq!(summary.updated, 1);
    }

    #[tokio::test]
    async fn test_update_commit_failure_propagates() {
        let mut repo = MockPartyRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![party(8, "Perú Libre", None)]));
        repo.expect_save_logo_changes()
            .times(1)
            .returning(|_| Err(AppError::Database(sea_orm::DbErr::Custom("connection lost".into()))));

        let mut out = Vec::new();
        let result = maintainer(repo).update_logo_paths(&mut out).await;

        assert!(matches!(result, Err(AppError::Database(_))));
        let text = rendered(out);
        assert!(text.contains("✓ Perú Libre"));
        assert!(!text.contains("Logo paths updated"));
    }

    #[tokio::test]
    async fn test_show_lists_parties_without_writing() {
        let mut repo = MockPartyRepository::new();
        repo.expect_list().returning(|| {
            Ok(vec![
                party(1, "Acción Nacional", Some("static/logos/accion_nacional.png")),
                party(2, "Juntos por el Perú", None),
                party(3, "Fuerza Popular", Some("")),
            ])
        });
        repo.expect_save_logo_changes().times(0);

        let mut out = Vec::new();
        let listed = maintainer(repo).show_current_logos(&mut out).await.unwrap();

        assert_eq!(listed.len(), 3);
        let text = rendered(out);
        assert!(text.contains(" 1. Acción Nacional\n    Logo: static/logos/accion_nacional.png"));
        assert!(text.contains(" 2. Juntos por el Perú\n    Logo: (no logo)"));
        assert!(text.contains(" 3. Fuerza Popular\n    Logo: (no logo)"));
    }

    #[tokio::test]
    async fn test_show_empty_database() {
        let mut repo = MockPartyRepository::new();
        repo.expect_list().returning(|| Ok(vec![]));
        repo.expect_save_logo_changes().times(0);

        let mut out = Vec::new();
        let listed = maintainer(repo).show_current_logos(&mut out).await.unwrap();

        assert!(listed.is_empty());
        assert!(rendered(out).contains("No parties found in the database."));
    }
}
