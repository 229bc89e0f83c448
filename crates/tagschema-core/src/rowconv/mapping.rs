use crate::{schema::Tag, Error, Result, Schema};

use indexmap::{IndexMap, IndexSet};
use std::sync::Arc;
use tracing::debug;

/// A partial function from source tags to destination tags.
///
/// Source tags without a destination are dropped by conversion. Destination
/// tags without a source are left `NULL`, which is only legal for nullable
/// columns. No two source tags map to the same destination tag.
///
/// A mapping is built once per conversion task and reused for every row.
#[derive(Debug, Clone)]
pub struct TagMapping {
    src: Arc<Schema>,
    dest: Arc<Schema>,

    /// Source tag to destination tag, in the source schema's column order.
    src_to_dest: IndexMap<Tag, Tag>,
}

impl TagMapping {
    /// Maps every column of `schema` onto itself.
    pub fn identity(schema: Arc<Schema>) -> TagMapping {
        let src_to_dest = schema.columns().tags().map(|tag| (tag, tag)).collect();

        TagMapping {
            src: schema.clone(),
            dest: schema,
            src_to_dest,
        }
    }

    /// Matches columns by name, case-sensitively. Unmatched source columns
    /// are dropped.
    pub fn by_name(src: Arc<Schema>, dest: Arc<Schema>) -> TagMapping {
        let src_to_dest: IndexMap<_, _> = name_matches(&src, &dest).collect();

        debug!(
            matched = src_to_dest.len(),
            dropped = src.len() - src_to_dest.len(),
            "built name-based tag mapping"
        );

        TagMapping {
            src,
            dest,
            src_to_dest,
        }
    }

    /// Matches columns by name and requires every destination column to have
    /// a source.
    pub fn by_name_complete(src: Arc<Schema>, dest: Arc<Schema>) -> Result<TagMapping> {
        let mapping = TagMapping::by_name(src, dest);
        mapping.ensure_covers_dest()?;
        Ok(mapping)
    }

    /// Builds a mapping from caller-supplied `(source, destination)` pairs.
    ///
    /// Fails if a tag is absent from its schema, or if a source or
    /// destination tag appears in more than one pair.
    pub fn explicit(
        src: Arc<Schema>,
        dest: Arc<Schema>,
        pairs: impl IntoIterator<Item = (Tag, Tag)>,
    ) -> Result<TagMapping> {
        let mut mapping = TagMapping {
            src,
            dest,
            src_to_dest: IndexMap::new(),
        };
        let mut targets = IndexSet::new();

        for (src_tag, dest_tag) in pairs {
            mapping.insert_explicit(&mut targets, src_tag, dest_tag)?;
        }

        mapping.sort_by_source();
        Ok(mapping)
    }

    /// Matches columns by name, except where `overrides` says otherwise.
    ///
    /// Explicit pairs strictly override name matches for the tags they
    /// cover: a name match is discarded if its source tag or its destination
    /// tag appears in any explicit pair.
    pub fn by_name_with_overrides(
        src: Arc<Schema>,
        dest: Arc<Schema>,
        overrides: impl IntoIterator<Item = (Tag, Tag)>,
    ) -> Result<TagMapping> {
        let mut mapping = TagMapping::explicit(src, dest, overrides)?;
        let targets: IndexSet<Tag> = mapping.src_to_dest.values().copied().collect();

        let matches: Vec<_> = name_matches(&mapping.src, &mapping.dest)
            .filter(|(src_tag, dest_tag)| {
                !mapping.src_to_dest.contains_key(src_tag) && !targets.contains(dest_tag)
            })
            .collect();

        mapping.src_to_dest.extend(matches);
        mapping.sort_by_source();
        Ok(mapping)
    }

    pub fn src(&self) -> &Arc<Schema> {
        &self.src
    }

    pub fn dest(&self) -> &Arc<Schema> {
        &self.dest
    }

    /// Returns the destination tag for `src_tag`, if it is mapped.
    pub fn get(&self, src_tag: Tag) -> Option<Tag> {
        self.src_to_dest.get(&src_tag).copied()
    }

    /// Iterates `(source, destination)` pairs in source column order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Tag, Tag)> + '_ {
        self.src_to_dest.iter().map(|(src, dest)| (*src, *dest))
    }

    pub fn len(&self) -> usize {
        self.src_to_dest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.src_to_dest.is_empty()
    }

    /// Returns `true` if the mapping carries every column of a schema onto
    /// itself, unchanged.
    pub fn is_identity(&self) -> bool {
        (Arc::ptr_eq(&self.src, &self.dest) || self.src == self.dest)
            && self.src_to_dest.len() == self.src.len()
            && self.iter().all(|(src, dest)| src == dest)
    }

    /// Fails with the first destination column that has no source.
    pub fn ensure_covers_dest(&self) -> Result<()> {
        let targets: IndexSet<Tag> = self.src_to_dest.values().copied().collect();

        match self
            .dest
            .columns()
            .iter()
            .find(|column| !targets.contains(&column.tag))
        {
            Some(column) => Err(Error::unmappable_column(format!(
                "destination column <{}> has no source column",
                column.name
            ))),
            None => Ok(()),
        }
    }

    fn insert_explicit(
        &mut self,
        targets: &mut IndexSet<Tag>,
        src_tag: Tag,
        dest_tag: Tag,
    ) -> Result<()> {
        if !self.src.columns().contains_tag(src_tag) {
            return Err(Error::unmappable_column(format!(
                "source schema has no column with tag {src_tag}"
            )));
        }

        if !self.dest.columns().contains_tag(dest_tag) {
            return Err(Error::unmappable_column(format!(
                "destination schema has no column with tag {dest_tag}"
            )));
        }

        if self.src_to_dest.contains_key(&src_tag) {
            return Err(Error::unmappable_column(format!(
                "source tag {src_tag} is mapped more than once"
            )));
        }

        if !targets.insert(dest_tag) {
            return Err(Error::unmappable_column(format!(
                "destination tag {dest_tag} is the target of more than one source tag"
            )));
        }

        self.src_to_dest.insert(src_tag, dest_tag);
        Ok(())
    }

    fn sort_by_source(&mut self) {
        let columns = self.src.columns();
        self.src_to_dest
            .sort_by(|a, _, b, _| columns.position(*a).cmp(&columns.position(*b)));
    }
}

/// Pairs of tags whose columns share a name, in source column order.
fn name_matches<'a>(src: &'a Schema, dest: &'a Schema) -> impl Iterator<Item = (Tag, Tag)> + 'a {
    src.columns().iter().filter_map(|column| {
        dest.column_by_name(&column.name)
            .map(|dest_column| (column.tag, dest_column.tag))
    })
}
