//! Unit tests for bar colour and icon resolution.

#[cfg(test)]
mod tests {
    use bevy::asset::{AssetPlugin, LoadState};
    use bevy::prelude::*;
    use bevy_egui::egui;
    use simulation::config::{BASE_MOVEMENT, OSMOREGULATION};
    use simulation::organelles::{OrganelleCatalog, OrganelleDefinition};
    use std::cell::RefCell;
    use std::time::Duration;

    use crate::bar_helper::{
        colour_to_egui, BarStyleResolver, BarType, IconLoader, ReservedBar, FALLBACK_COLOUR,
    };

    /// Hands back the requested path as the "handle" and records every call.
    #[derive(Default)]
    struct FakeLoader {
        requested: RefCell<Vec<String>>,
        unresolvable: Vec<&'static str>,
    }

    impl IconLoader for FakeLoader {
        type Handle = String;

        fn load_icon(&self, path: &str) -> Option<String> {
            self.requested.borrow_mut().push(path.to_string());
            if self.unresolvable.iter().any(|p| *p == path) {
                None
            } else {
                Some(path.to_string())
            }
        }
    }

    fn sample_catalog() -> OrganelleCatalog {
        OrganelleCatalog::new(vec![
            OrganelleDefinition::new(
                "mitochondrion",
                Color::srgb(0.1, 0.2, 0.3),
                Color::srgb(0.4, 0.5, 0.6),
                "icons/mito.png",
            ),
            OrganelleDefinition::new(
                "flagellum",
                Color::srgb(0.9, 0.9, 0.1),
                Color::srgb(0.2, 0.8, 0.2),
                "icons/flagellum.png",
            ),
            // Collides with a reserved identifier; must never win.
            OrganelleDefinition::new(
                BASE_MOVEMENT,
                Color::BLACK,
                Color::BLACK,
                "icons/impostor.png",
            ),
        ])
    }

    // -------------------------------------------------------------------------
    // Bar types
    // -------------------------------------------------------------------------

    #[test]
    fn test_bar_type_from_tag() {
        assert_eq!(BarType::from_tag("ATP"), BarType::Atp);
        assert_eq!(BarType::from_tag("atp"), BarType::Other, "tags are case-sensitive");
        assert_eq!(BarType::from_tag("Glucose"), BarType::Other);
        assert_eq!(BarType::from_tag(""), BarType::Other);
    }

    #[test]
    fn test_reserved_bar_from_item() {
        assert_eq!(ReservedBar::from_item(BASE_MOVEMENT), Some(ReservedBar::BaseMovement));
        assert_eq!(ReservedBar::from_item(OSMOREGULATION), Some(ReservedBar::Osmoregulation));
        assert_eq!(ReservedBar::from_item("mitochondrion"), None);
    }

    // -------------------------------------------------------------------------
    // Colours
    // -------------------------------------------------------------------------

    #[test]
    fn test_other_bar_type_always_fallback() {
        let catalog = sample_catalog();
        let resolver = BarStyleResolver::new(&catalog);
        for item in ["mitochondrion", BASE_MOVEMENT, OSMOREGULATION, "nonexistent", ""] {
            for production in [true, false] {
                assert_eq!(
                    resolver.resolve_colour(BarType::Other, item, production),
                    FALLBACK_COLOUR,
                    "item {item} production {production}"
                );
            }
        }
    }

    #[test]
    fn test_fallback_colour_value() {
        assert_eq!(FALLBACK_COLOUR, Color::srgb(0.68, 0.68, 0.68));
        assert_eq!(FALLBACK_COLOUR.to_srgba().alpha, 1.0);
    }

    #[test]
    fn test_base_movement_colour_ignores_production_flag() {
        let catalog = sample_catalog();
        let resolver = BarStyleResolver::new(&catalog);
        for production in [true, false] {
            assert_eq!(
                resolver.resolve_colour(BarType::Atp, BASE_MOVEMENT, production),
                Color::srgb(1.0, 0.33, 0.14)
            );
        }
    }

    #[test]
    fn test_osmoregulation_colour_ignores_production_flag() {
        let catalog = sample_catalog();
        let resolver = BarStyleResolver::new(&catalog);
        for production in [true, false] {
            assert_eq!(
                resolver.resolve_colour(BarType::Atp, OSMOREGULATION, production),
                Color::srgb(1.0, 0.84, 0.24)
            );
        }
    }

    #[test]
    fn test_reserved_colours_without_catalog() {
        let catalog = OrganelleCatalog::default();
        let resolver = BarStyleResolver::new(&catalog);
        assert_eq!(
            resolver.resolve_colour(BarType::Atp, OSMOREGULATION, false),
            ReservedBar::Osmoregulation.colour()
        );
    }

    #[test]
    fn test_organelle_colour_by_side() {
        let catalog = sample_catalog();
        let resolver = BarStyleResolver::new(&catalog);
        assert_eq!(
            resolver.resolve_colour(BarType::Atp, "mitochondrion", true),
            Color::srgb(0.1, 0.2, 0.3)
        );
        assert_eq!(
            resolver.resolve_colour(BarType::Atp, "mitochondrion", false),
            Color::srgb(0.4, 0.5, 0.6)
        );
    }

    #[test]
    fn test_unknown_organelle_is_fallback() {
        let catalog = sample_catalog();
        let resolver = BarStyleResolver::new(&catalog);
        assert_eq!(
            resolver.resolve_colour(BarType::Atp, "nonexistent", false),
            FALLBACK_COLOUR
        );
        assert_eq!(
            resolver.resolve_colour(BarType::Atp, "Mitochondrion", true),
            FALLBACK_COLOUR
        );
    }

    #[test]
    fn test_reserved_name_shadows_organelle() {
        let catalog = sample_catalog();
        let resolver = BarStyleResolver::new(&catalog);
        assert_eq!(
            resolver.resolve_colour(BarType::Atp, BASE_MOVEMENT, true),
            ReservedBar::BaseMovement.colour()
        );
    }

    #[test]
    fn test_duplicate_organelle_first_match_wins() {
        let catalog = OrganelleCatalog::new(vec![
            OrganelleDefinition::new("vacuole", Color::WHITE, Color::WHITE, "first.png"),
            OrganelleDefinition::new("vacuole", Color::BLACK, Color::BLACK, "second.png"),
        ]);
        let resolver = BarStyleResolver::new(&catalog);
        assert_eq!(resolver.resolve_colour(BarType::Atp, "vacuole", true), Color::WHITE);
        assert_eq!(resolver.icon_path(BarType::Atp, "vacuole"), Some("first.png"));
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let catalog = sample_catalog();
        let resolver = BarStyleResolver::new(&catalog);
        let loader = FakeLoader::default();
        let first = (
            resolver.resolve_colour(BarType::Atp, "flagellum", false),
            resolver.resolve_icon(BarType::Atp, "flagellum", &loader),
        );
        let second = (
            resolver.resolve_colour(BarType::Atp, "flagellum", false),
            resolver.resolve_icon(BarType::Atp, "flagellum", &loader),
        );
        assert_eq!(first, second);
    }

    // -------------------------------------------------------------------------
    // Icons
    // -------------------------------------------------------------------------

    #[test]
    fn test_other_bar_type_has_no_icon_and_skips_loader() {
        let catalog = sample_catalog();
        let resolver = BarStyleResolver::new(&catalog);
        let loader = FakeLoader::default();
        for item in ["mitochondrion", BASE_MOVEMENT, "nonexistent"] {
            assert_eq!(resolver.resolve_icon(BarType::Other, item, &loader), None);
        }
        assert!(loader.requested.borrow().is_empty());
    }

    #[test]
    fn test_reserved_icons() {
        let catalog = sample_catalog();
        let resolver = BarStyleResolver::new(&catalog);
        let loader = FakeLoader::default();
        assert_eq!(
            resolver.resolve_icon(BarType::Atp, BASE_MOVEMENT, &loader),
            Some("textures/gui/bevel/baseMovementIcon.png".to_string())
        );
        assert_eq!(
            resolver.resolve_icon(BarType::Atp, OSMOREGULATION, &loader),
            Some("textures/gui/bevel/osmoIcon.png".to_string())
        );
    }

    #[test]
    fn test_organelle_icon_uses_catalog_path() {
        let catalog = sample_catalog();
        let resolver = BarStyleResolver::new(&catalog);
        let loader = FakeLoader::default();
        assert_eq!(
            resolver.resolve_icon(BarType::Atp, "mitochondrion", &loader),
            Some("icons/mito.png".to_string())
        );
        assert_eq!(*loader.requested.borrow(), vec!["icons/mito.png".to_string()]);
    }

    #[test]
    fn test_unknown_organelle_has_no_icon_and_skips_loader() {
        let catalog = sample_catalog();
        let resolver = BarStyleResolver::new(&catalog);
        let loader = FakeLoader::default();
        assert_eq!(resolver.resolve_icon(BarType::Atp, "nonexistent", &loader), None);
        assert!(loader.requested.borrow().is_empty());
    }

    #[test]
    fn test_loader_failure_passes_through() {
        let catalog = sample_catalog();
        let resolver = BarStyleResolver::new(&catalog);
        let loader = FakeLoader {
            unresolvable: vec!["icons/flagellum.png"],
            ..Default::default()
        };
        assert_eq!(resolver.resolve_icon(BarType::Atp, "flagellum", &loader), None);
        assert_eq!(loader.requested.borrow().len(), 1);
    }

    #[test]
    fn test_mitochondrion_scenario() {
        let catalog = OrganelleCatalog::new(vec![OrganelleDefinition::new(
            "mitochondrion",
            Color::srgb(0.1, 0.2, 0.3),
            Color::srgb(0.7, 0.1, 0.1),
            "icons/mito.png",
        )]);
        let resolver = BarStyleResolver::new(&catalog);
        let loader = FakeLoader::default();
        let atp = BarType::from_tag("ATP");

        assert_eq!(
            resolver.resolve_colour(atp, "mitochondrion", true),
            Color::srgb(0.1, 0.2, 0.3)
        );
        assert_eq!(
            resolver.resolve_icon(atp, "mitochondrion", &loader),
            Some("icons/mito.png".to_string())
        );
        assert_eq!(resolver.resolve_colour(atp, "nonexistent", false), FALLBACK_COLOUR);
    }

    // -------------------------------------------------------------------------
    // AssetServer loader
    // -------------------------------------------------------------------------

    fn asset_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Image>();
        app
    }

    #[test]
    fn test_asset_server_empty_path_is_absent() {
        let app = asset_app();
        let server = app.world().resource::<AssetServer>();
        assert_eq!(server.load_icon(""), None);
    }

    #[test]
    fn test_asset_server_missing_icon_becomes_absent() {
        let mut app = asset_app();
        let server = app.world().resource::<AssetServer>().clone();
        let path = "textures/gui/organelles/not_a_real_icon.png";

        let first = server
            .load_icon(path)
            .expect("first request starts an asynchronous load");

        let mut failed = false;
        for _ in 0..400 {
            app.update();
            if matches!(server.get_load_state(first.id()), Some(LoadState::Failed(_))) {
                failed = true;
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(failed, "loading a missing file should fail");

        assert_eq!(server.load_icon(path), None);
        assert!(
            matches!(server.get_load_state(first.id()), Some(LoadState::Failed(_))),
            "asking again must not restart the failed load"
        );
    }

    // -------------------------------------------------------------------------
    // egui conversion
    // -------------------------------------------------------------------------

    #[test]
    fn test_colour_to_egui() {
        assert_eq!(
            colour_to_egui(Color::srgb(1.0, 0.0, 0.0)),
            egui::Color32::from_rgb(255, 0, 0)
        );
        assert_eq!(
            colour_to_egui(FALLBACK_COLOUR),
            egui::Color32::from_rgb(173, 173, 173)
        );
    }
}
