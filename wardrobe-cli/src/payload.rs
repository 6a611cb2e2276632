//! JSON payload printed by the `generate` command.
//!
//! Success and failure share one envelope so that callers can branch on
//! `success` alone. Failure payloads carry a `hint` suggesting how to enrich
//! the wardrobe.

use serde::Serialize;
use wardrobe_core::{
    Category, Garment, GarmentStore, GenerateResponse, Occasion, Outfit, OutfitKind,
    ResolveError, resolve_outfit,
};

use crate::CliError;

/// Smallest wardrobe the command will try to combine.
pub(crate) const MIN_GARMENTS: usize = 2;

/// Label reported when no occasion narrows the pool.
const ANY_OCCASION: &str = "any";

const TOO_FEW_MESSAGE: &str = "At least 2 garments are needed to generate outfits";
const TOO_FEW_HINT: &str = "Upload more garments to your wardrobe before generating outfits!";
const NO_OUTFITS_MESSAGE: &str = "Could not generate outfits from the available garments";
const NO_OUTFITS_HINT: &str =
    "Try adding more variety: garments in easier-to-match colors or in other categories";

/// Result of one `generate` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Generated,
    TooFewGarments { found: usize },
    NoOutfits,
}

/// Top-level response envelope.
#[derive(Debug, Serialize)]
pub(crate) struct Payload<'w> {
    pub(crate) success: bool,
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) hint: Option<&'static str>,
    pub(crate) data: Vec<OutfitView<'w>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) meta: Option<Meta>,
    #[serde(skip)]
    pub(crate) outcome: Outcome,
}

/// An outfit with its members hydrated into full garment records.
#[derive(Debug, Serialize)]
pub(crate) struct OutfitView<'w> {
    pub(crate) score: u8,
    pub(crate) kind: OutfitKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) reason: Option<String>,
    pub(crate) items: Vec<&'w Garment>,
}

impl<'w> OutfitView<'w> {
    fn resolve<S>(store: &'w S, outfit: &Outfit) -> Result<Self, ResolveError>
    where
        S: GarmentStore,
    {
        Ok(Self {
            score: outfit.score,
            kind: outfit.kind,
            reason: outfit.reason.clone(),
            items: resolve_outfit(store, outfit)?,
        })
    }
}

/// Summary of the wardrobe and the generated outfits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Meta {
    pub(crate) total_garments: usize,
    pub(crate) generated_outfits: usize,
    /// Mean score rendered with two decimals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) average_score: Option<String>,
    pub(crate) occasion: String,
    pub(crate) categories: Vec<Category>,
}

impl Payload<'_> {
    /// Failure payload for wardrobes below [`MIN_GARMENTS`].
    pub(crate) fn too_few_garments(found: usize) -> Self {
        Self {
            success: false,
            message: TOO_FEW_MESSAGE.to_owned(),
            hint: Some(TOO_FEW_HINT),
            data: Vec::new(),
            meta: None,
            outcome: Outcome::TooFewGarments { found },
        }
    }

    /// Failure payload for a search that accepted nothing.
    pub(crate) fn no_outfits(garments: &[Garment], occasion: Option<&Occasion>) -> Self {
        Self {
            success: false,
            message: NO_OUTFITS_MESSAGE.to_owned(),
            hint: Some(NO_OUTFITS_HINT),
            data: Vec::new(),
            meta: Some(Meta::describe(garments, occasion, &GenerateResponse::default())),
            outcome: Outcome::NoOutfits,
        }
    }

    /// Map the outcome to the command's result, after the payload is printed.
    pub(crate) fn into_result(self) -> Result<(), CliError> {
        match self.outcome {
            Outcome::Generated => Ok(()),
            Outcome::TooFewGarments { found } => Err(CliError::InsufficientGarments {
                found,
                required: MIN_GARMENTS,
            }),
            Outcome::NoOutfits => Err(CliError::NoOutfits),
        }
    }
}

impl<'w> Payload<'w> {
    /// Success payload, hydrating every outfit from `store`.
    ///
    /// # Errors
    /// Returns [`ResolveError`] when an outfit names a garment missing from
    /// `store`.
    pub(crate) fn generated<S>(
        store: &'w S,
        garments: &[Garment],
        occasion: Option<&Occasion>,
        response: &GenerateResponse,
    ) -> Result<Self, ResolveError>
    where
        S: GarmentStore,
    {
        let data = response
            .outfits
            .iter()
            .map(|outfit| OutfitView::resolve(store, outfit))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            success: true,
            message: format!("{} outfits generated successfully!", data.len()),
            hint: None,
            data,
            meta: Some(Meta::describe(garments, occasion, response)),
            outcome: Outcome::Generated,
        })
    }
}

impl Meta {
    fn describe(
        garments: &[Garment],
        occasion: Option<&Occasion>,
        response: &GenerateResponse,
    ) -> Self {
        Self {
            total_garments: garments.len(),
            generated_outfits: response.outfits.len(),
            average_score: response.average_score().map(|mean| format!("{mean:.2}")),
            occasion: occasion.map_or_else(|| ANY_OCCASION.to_owned(), ToString::to_string),
            categories: categories_present(garments),
        }
    }
}

/// Distinct categories in order of first appearance.
pub(crate) fn categories_present(garments: &[Garment]) -> Vec<Category> {
    let mut seen = Vec::new();
    for garment in garments {
        if !seen.contains(&garment.category) {
            seen.push(garment.category);
        }
    }
    seen
}
