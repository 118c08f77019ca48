//! Unit tests for gm-catalog.

#[cfg(test)]
mod memory {
    use gm_core::{GeoPoint, ImageId};

    use crate::{CatalogProvider, MemoryCatalog};

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut catalog = MemoryCatalog::new();
        let a = catalog.insert("a", None);
        let b = catalog.insert("b", Some(GeoPoint::new(1.0, 2.0).unwrap()));
        assert_eq!(a, ImageId(0));
        assert_eq!(b, ImageId(1));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn name_lookup() {
        let mut catalog = MemoryCatalog::new();
        let id = catalog.insert("Big Ben", None);
        assert_eq!(catalog.name(id), Some("Big Ben"));
        assert_eq!(catalog.name(ImageId(99)), None);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut catalog = MemoryCatalog::new();
        catalog.insert("first", Some(GeoPoint::new(10.0, 20.0).unwrap()));
        catalog.insert("second", None);

        let candidates = catalog.list().unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].id, ImageId(0));
        assert!(candidates[0].point.is_some());
        assert_eq!(candidates[1].id, ImageId(1));
        assert!(candidates[1].point.is_none());
    }

    #[test]
    fn empty_catalog_lists_empty() {
        let catalog = MemoryCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.list().unwrap().is_empty());
    }
}

#[cfg(test)]
mod landmarks {
    use crate::{CatalogProvider, sample_catalog};

    #[test]
    fn eight_located_entries() {
        let catalog = sample_catalog().unwrap();
        let candidates = catalog.list().unwrap();
        assert_eq!(candidates.len(), 8);
        assert!(candidates.iter().all(|c| c.point.is_some()));
    }

    #[test]
    fn known_names_present() {
        let catalog = sample_catalog().unwrap();
        let names: Vec<_> = catalog
            .list()
            .unwrap()
            .iter()
            .filter_map(|c| catalog.name(c.id).map(str::to_owned))
            .collect();
        assert!(names.contains(&"Pentagon".to_owned()));
        assert!(names.contains(&"Sydney Harbor".to_owned()));
    }

    #[test]
    fn pentagon_to_everest_distance() {
        let catalog = sample_catalog().unwrap();
        let candidates = catalog.list().unwrap();
        let pentagon = candidates[0].point.unwrap();
        let everest = candidates[1].point.unwrap();
        let d = pentagon.distance_km(everest);
        assert!((d - 11_857.0).abs() < 118.6, "got {d}");
    }
}
