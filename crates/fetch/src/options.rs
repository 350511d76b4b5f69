fetch_options! {
    /// Leaf node for relations without a nested graph, such as `properties`.
    EmptyFetchOptions("Empty") {}
}

fetch_options! {
    SpaceFetchOptions("Space") {
        registrator: PersonFetchOptions = "registrator" => with_registrator, with_registrator_using, has_registrator;
        samples: SampleFetchOptions = "samples" => with_samples, with_samples_using, has_samples;
        projects: ProjectFetchOptions = "projects" => with_projects, with_projects_using, has_projects;
    }
}

fetch_options! {
    ProjectFetchOptions("Project") {
        experiments: ExperimentFetchOptions = "experiments" => with_experiments, with_experiments_using, has_experiments;
        history: HistoryEntryFetchOptions = "history" => with_history, with_history_using, has_history;
        space: SpaceFetchOptions = "space" => with_space, with_space_using, has_space;
        registrator: PersonFetchOptions = "registrator" => with_registrator, with_registrator_using, has_registrator;
        modifier: PersonFetchOptions = "modifier" => with_modifier, with_modifier_using, has_modifier;
        leader: PersonFetchOptions = "leader" => with_leader, with_leader_using, has_leader;
        attachments: AttachmentFetchOptions = "attachments" => with_attachments, with_attachments_using, has_attachments;
    }
}

fetch_options! {
    ExperimentFetchOptions("Experiment") {
        entity_type: ExperimentTypeFetchOptions = "type" => with_type, with_type_using, has_type;
        project: ProjectFetchOptions = "project" => with_project, with_project_using, has_project;
        data_sets: DataSetFetchOptions = "dataSets" => with_data_sets, with_data_sets_using, has_data_sets;
        samples: SampleFetchOptions = "samples" => with_samples, with_samples_using, has_samples;
        history: HistoryEntryFetchOptions = "history" => with_history, with_history_using, has_history;
        properties: EmptyFetchOptions = "properties" => with_properties, with_properties_using, has_properties;
        tags: TagFetchOptions = "tags" => with_tags, with_tags_using, has_tags;
        registrator: PersonFetchOptions = "registrator" => with_registrator, with_registrator_using, has_registrator;
        modifier: PersonFetchOptions = "modifier" => with_modifier, with_modifier_using, has_modifier;
        attachments: AttachmentFetchOptions = "attachments" => with_attachments, with_attachments_using, has_attachments;
    }
}

fetch_options! {
    ExperimentTypeFetchOptions("ExperimentType") {}
}

fetch_options! {
    /// What to include when fetching samples.
    ///
    /// `parents`, `children`, `container` and `components` nest further
    /// sample options; each level is created by its own `with_*` call.
    SampleFetchOptions("Sample") {
        entity_type: SampleTypeFetchOptions = "type" => with_type, with_type_using, has_type;
        space: SpaceFetchOptions = "space" => with_space, with_space_using, has_space;
        experiment: ExperimentFetchOptions = "experiment" => with_experiment, with_experiment_using, has_experiment;
        properties: EmptyFetchOptions = "properties" => with_properties, with_properties_using, has_properties;
        parents: SampleFetchOptions = "parents" => with_parents, with_parents_using, has_parents;
        children: SampleFetchOptions = "children" => with_children, with_children_using, has_children;
        container: SampleFetchOptions = "container" => with_container, with_container_using, has_container;
        components: SampleFetchOptions = "components" => with_components, with_components_using, has_components;
        data_sets: DataSetFetchOptions = "dataSets" => with_data_sets, with_data_sets_using, has_data_sets;
        history: HistoryEntryFetchOptions = "history" => with_history, with_history_using, has_history;
        tags: TagFetchOptions = "tags" => with_tags, with_tags_using, has_tags;
        registrator: PersonFetchOptions = "registrator" => with_registrator, with_registrator_using, has_registrator;
        modifier: PersonFetchOptions = "modifier" => with_modifier, with_modifier_using, has_modifier;
        attachments: AttachmentFetchOptions = "attachments" => with_attachments, with_attachments_using, has_attachments;
    }
}

fetch_options! {
    SampleTypeFetchOptions("SampleType") {}
}

fetch_options! {
    DataSetFetchOptions("DataSet") {
        entity_type: DataSetTypeFetchOptions = "type" => with_type, with_type_using, has_type;
        experiment: ExperimentFetchOptions = "experiment" => with_experiment, with_experiment_using, has_experiment;
        sample: SampleFetchOptions = "sample" => with_sample, with_sample_using, has_sample;
        properties: EmptyFetchOptions = "properties" => with_properties, with_properties_using, has_properties;
        parents: DataSetFetchOptions = "parents" => with_parents, with_parents_using, has_parents;
        children: DataSetFetchOptions = "children" => with_children, with_children_using, has_children;
        containers: DataSetFetchOptions = "containers" => with_containers, with_containers_using, has_containers;
        components: DataSetFetchOptions = "components" => with_components, with_components_using, has_components;
        tags: TagFetchOptions = "tags" => with_tags, with_tags_using, has_tags;
        history: HistoryEntryFetchOptions = "history" => with_history, with_history_using, has_history;
        registrator: PersonFetchOptions = "registrator" => with_registrator, with_registrator_using, has_registrator;
        modifier: PersonFetchOptions = "modifier" => with_modifier, with_modifier_using, has_modifier;
    }
}

fetch_options! {
    DataSetTypeFetchOptions("DataSetType") {}
}

fetch_options! {
    PersonFetchOptions("Person") {
        space: SpaceFetchOptions = "space" => with_space, with_space_using, has_space;
        registrator: PersonFetchOptions = "registrator" => with_registrator, with_registrator_using, has_registrator;
    }
}

fetch_options! {
    TagFetchOptions("Tag") {
        owner: PersonFetchOptions = "owner" => with_owner, with_owner_using, has_owner;
    }
}

fetch_options! {
    AttachmentFetchOptions("Attachment") {
        registrator: PersonFetchOptions = "registrator" => with_registrator, with_registrator_using, has_registrator;
        previous_version: AttachmentFetchOptions = "previousVersion" => with_previous_version, with_previous_version_using, has_previous_version;
        content: EmptyFetchOptions = "content" => with_content, with_content_using, has_content;
    }
}

fetch_options! {
    HistoryEntryFetchOptions("HistoryEntry") {
        author: PersonFetchOptions = "author" => with_author, with_author_using, has_author;
    }
}
