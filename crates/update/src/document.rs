use openbis_types::ObjectId;

update_document! {
    SpaceUpdate(Space, "spaceId") {
        fields {
            description: String = "description" => set_description,
        }
        collections {}
    }
}

update_document! {
    ProjectUpdate(Project, "projectId") {
        fields {
            space_id: ObjectId = "spaceId" => set_space_id,
            description: String = "description" => set_description,
        }
        collections {}
    }
}

update_document! {
    ExperimentUpdate(Experiment, "experimentId") {
        fields {
            project_id: ObjectId = "projectId" => set_project_id,
        }
        collections {
            tag_ids = "tagIds" => tag_ids_mut,
        }
        properties => properties;
    }
}

update_document! {
    /// Changes to one sample.
    ///
    /// ```
    /// use openbis_types::{EntityKind, ObjectId};
    /// use openbis_update::SampleUpdate;
    ///
    /// let mut update = SampleUpdate::new(ObjectId::perm_id(EntityKind::Sample, "20160817175233002-331"))?;
    /// update.set_property("COLOR", Some("red".to_string()));
    /// update.parent_ids_mut().add([ObjectId::perm_id(EntityKind::Sample, "20160817175233002-332")])?;
    /// assert!(update.is_modified());
    /// # Ok::<(), openbis_update::UpdateError>(())
    /// ```
    SampleUpdate(Sample, "sampleId") {
        fields {
            experiment_id: ObjectId = "experimentId" => set_experiment_id,
            project_id: ObjectId = "projectId" => set_project_id,
            space_id: ObjectId = "spaceId" => set_space_id,
            container_id: ObjectId = "containerId" => set_container_id,
        }
        collections {
            tag_ids = "tagIds" => tag_ids_mut,
            parent_ids = "parentIds" => parent_ids_mut,
            child_ids = "childIds" => child_ids_mut,
            component_ids = "componentIds" => component_ids_mut,
        }
        properties => properties;
    }
}

update_document! {
    DataSetUpdate(DataSet, "dataSetId") {
        fields {
            experiment_id: ObjectId = "experimentId" => set_experiment_id,
            sample_id: ObjectId = "sampleId" => set_sample_id,
        }
        collections {
            tag_ids = "tagIds" => tag_ids_mut,
            parent_ids = "parentIds" => parent_ids_mut,
            child_ids = "childIds" => child_ids_mut,
            container_ids = "containerIds" => container_ids_mut,
            component_ids = "componentIds" => component_ids_mut,
        }
        properties => properties;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UpdateError;
    use openbis_types::EntityKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_id_kind_is_checked() {
        let id = ObjectId::perm_id(EntityKind::Sample, "20160817175233002-331");
        assert_eq!(
            ExperimentUpdate::new(id.clone()).unwrap_err(),
            UpdateError::WrongIdKind {
                document: "ExperimentUpdate",
                expected: EntityKind::Experiment,
                found: EntityKind::Sample,
            }
        );
        assert!(SampleUpdate::new(id).is_ok());
    }

    #[test]
    fn test_fresh_document_is_unmodified() {
        let update = SpaceUpdate::new(ObjectId::perm_id(EntityKind::Space, "LAB")).unwrap();
        assert!(!update.is_modified());
        assert!(!update.description().is_modified());
    }
}
