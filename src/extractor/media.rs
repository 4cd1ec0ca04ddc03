use tracing::{debug, info, instrument};

use crate::article::ArticleRecord;
use crate::config::ExtractorConfig;
use crate::document::{Document, MarkupParser};
use crate::entities::{Entity, MediaEntity, MediaPopularity};
use crate::extractor::fields::{
    CREW_ROLES, DIRECTOR_ROLES, PRODUCER_ROLES, STARRING_ROLES, WRITER_ROLES, classify_media_type,
    extract_awards, extract_budget, extract_crew, extract_external_ids, extract_genres,
    extract_meta, extract_plot_summary, extract_poster_image, extract_region,
    extract_related_media, extract_running_time, extract_trailers,
};
use crate::extractor::sections::extract_sections;
use crate::extractor::{ExtractError, Extraction, Strategy};
use crate::handlers::HandlerRegistry;

/// Extracts one media entity per article, preceded by whatever the
/// supporting section handlers emit (seasons, episodes).
pub struct MediaStrategy {
    parser: Box<dyn MarkupParser>,
    registry: HandlerRegistry,
    config: ExtractorConfig,
}

impl MediaStrategy {
    pub fn new<P: MarkupParser + 'static>(parser: P, config: ExtractorConfig) -> Self {
        let registry = HandlerRegistry::with_defaults(&config);
        Self::with_registry(parser, registry, config)
    }

    pub fn with_registry<P: MarkupParser + 'static>(
        parser: P,
        registry: HandlerRegistry,
        config: ExtractorConfig,
    ) -> Self {
        Self {
            parser: Box::new(parser),
            registry,
            config,
        }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Runs every field extractor against the parsed tree and raw record.
    pub fn build_media(&self, article: &ArticleRecord, doc: &Document) -> MediaEntity {
        let genre = extract_genres(doc);
        let media_type = classify_media_type(article, &genre);
        let description = doc
            .lead()
            .map(|lead| lead.text.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_string);
        let original_title = Some(article.title.trim())
            .filter(|title| !title.is_empty())
            .map(str::to_string);

        MediaEntity {
            id: article.wikibase_item.clone(),
            lang: article.language.clone(),
            title: doc.title.clone(),
            description,
            original_title,
            sections: extract_sections(doc),
            media_type,
            meta: extract_meta(doc),
            external_ids: extract_external_ids(article),
            links: article.external_link.clone(),
            region: extract_region(article),
            popularity: MediaPopularity {
                wiki: article.popularity_score,
            },
            urls: article.redirect_titles(),
            related_media: extract_related_media(doc),
            poster_image: extract_poster_image(doc, self.config.file_path_base()),
            trailers: extract_trailers(article, doc),
            director: extract_crew(doc, DIRECTOR_ROLES),
            producer: extract_crew(doc, PRODUCER_ROLES),
            writer: extract_crew(doc, WRITER_ROLES),
            crew: extract_crew(doc, CREW_ROLES),
            starring: extract_crew(doc, STARRING_ROLES),
            genre,
            budget: extract_budget(doc),
            running_time: extract_running_time(doc),
            plot_summary: extract_plot_summary(doc).into_text(),
            awards: extract_awards(doc),
        }
    }
}

impl Strategy for MediaStrategy {
    fn name(&self) -> &'static str {
        "media"
    }

    #[instrument(skip_all, fields(article = %article.title, id = %article.wikibase_item))]
    fn parse(&self, article: &ArticleRecord) -> Result<Extraction, ExtractError> {
        let doc = self.parser.parse(&article.source_text)?;

        let mut extraction = Extraction::default();
        for handler in self.registry.supporting(&article.template) {
            let output = handler.extract(article, &doc)?;
            debug!(
                handler = handler.name(),
                entities = output.entities.len(),
                failed = output.failed,
                "section handler finished"
            );
            extraction.merge(output);
        }

        let media = self.build_media(article, &doc);
        extraction.entities.push(Entity::Media(media));

        info!(
            entities = extraction.entities.len(),
            failed = extraction.failed,
            "article extracted"
        );
        Ok(extraction)
    }
}
