//! Behavioural coverage for the outfit generators.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wardrobe_core::test_support::garment;
use wardrobe_core::{
    Category, Color, Garment, GenerateError, GenerateRequest, GenerateResponse, Generator, Style,
};
use wardrobe_generator::{ExhaustiveGenerator, OutfitGenerator};
use wardrobe_scorer::PairwiseScorer;

const SEED: u64 = 42;

#[derive(Debug, Default)]
struct GenerationWorld {
    garments: RefCell<Vec<Garment>>,
    result: RefCell<Option<Result<GenerateResponse, GenerateError>>>,
}

impl GenerationWorld {
    fn add(&self, category: Category, color: Color, style: Style) {
        let mut garments = self.garments.borrow_mut();
        let id = format!("g{}", garments.len());
        garments.push(garment(&id, category, color, style));
    }

    fn run(&self, generator: &dyn Generator, count: usize) {
        let request = GenerateRequest {
            count,
            seed: SEED,
            ..GenerateRequest::default()
        };
        let result = generator.generate(&self.garments.borrow(), &request);
        self.result.replace(Some(result));
    }

    #[expect(clippy::expect_used, reason = "steps run after a `when` step")]
    fn response(&self) -> GenerateResponse {
        self.result
            .borrow()
            .clone()
            .expect("generation should have run")
            .expect("generation should succeed")
    }
}

#[fixture]
fn world() -> GenerationWorld {
    GenerationWorld::default()
}

#[given("a black casual top")]
fn black_top(world: &GenerationWorld) {
    world.add(Category::Top, Color::Black, Style::Casual);
}

#[given("a white casual bottom")]
fn white_bottom(world: &GenerationWorld) {
    world.add(Category::Bottom, Color::White, Style::Casual);
}

#[given("black casual shoes")]
fn black_shoes(world: &GenerationWorld) {
    world.add(Category::Shoes, Color::Black, Style::Casual);
}

#[given("white casual shoes")]
fn white_shoes(world: &GenerationWorld) {
    world.add(Category::Shoes, Color::White, Style::Casual);
}

#[given("a red formal dress")]
fn red_dress(world: &GenerationWorld) {
    world.add(Category::Dress, Color::Red, Style::Formal);
}

#[given("a navy formal dress")]
fn navy_dress(world: &GenerationWorld) {
    world.add(Category::Dress, Color::Navy, Style::Formal);
}

#[given("red formal shoes")]
fn red_shoes(world: &GenerationWorld) {
    world.add(Category::Shoes, Color::Red, Style::Formal);
}

#[given("white formal shoes")]
fn white_formal_shoes(world: &GenerationWorld) {
    world.add(Category::Shoes, Color::White, Style::Formal);
}

#[given("an orange sport top")]
fn orange_top(world: &GenerationWorld) {
    world.add(Category::Top, Color::Orange, Style::Sport);
}

#[given("a purple formal bottom")]
fn purple_bottom(world: &GenerationWorld) {
    world.add(Category::Bottom, Color::Purple, Style::Formal);
}

#[when("I request {count:usize} outfits")]
fn request_outfits(world: &GenerationWorld, count: usize) {
    world.run(&OutfitGenerator::new(PairwiseScorer::default()), count);
}

#[when("I request {count:usize} outfits exhaustively")]
fn request_exhaustively(world: &GenerationWorld, count: usize) {
    world.run(&ExhaustiveGenerator::new(PairwiseScorer::default()), count);
}

#[then("the best outfit is a {kind:word} look")]
fn best_kind(world: &GenerationWorld, kind: String) {
    let response = world.response();
    let best = response.outfits.first().map(|o| o.kind.as_str());
    assert_eq!(best, Some(kind.trim_matches('"')));
}

#[then("one outfit is a {kind:word} look")]
fn some_kind(world: &GenerationWorld, kind: String) {
    let response = world.response();
    let expected = kind.trim_matches('"');
    assert!(
        response.outfits.iter().any(|o| o.kind.as_str() == expected),
        "no {expected} outfit among {:?}",
        response.outfits
    );
}

#[then("the best outfit wears the {color:word} shoes")]
#[expect(clippy::expect_used, reason = "steps run after a `when` step")]
fn best_shoes(world: &GenerationWorld, color: String) {
    let response = world.response();
    let garments = world.garments.borrow();
    let expected: Color = color.parse().expect("known color");
    let best = response.outfits.first().expect("an outfit");
    let shoes: Vec<Color> = garments
        .iter()
        .filter(|g| g.category == Category::Shoes && best.ids().any(|id| *id == g.id))
        .map(|g| g.color)
        .collect();
    assert_eq!(shoes, [expected]);
}

#[then("the best outfit scores at least {minimum:u8}")]
fn best_score(world: &GenerationWorld, minimum: u8) {
    let response = world.response();
    let best = response.outfits.first().map_or(0, |o| o.score);
    assert!(best >= minimum, "best score {best} below {minimum}");
}

#[then("every outfit scores at most {maximum:u8}")]
fn every_score_at_most(world: &GenerationWorld, maximum: u8) {
    let response = world.response();
    assert!(response.outfits.iter().all(|o| o.score <= maximum));
}

#[then("no outfits are returned")]
fn no_outfits(world: &GenerationWorld) {
    assert!(world.response().outfits.is_empty());
}

#[then("{expected:usize} outfit is returned")]
fn outfit_count(world: &GenerationWorld, expected: usize) {
    assert_eq!(world.response().outfits.len(), expected);
}

#[then("the request is rejected as invalid")]
fn rejected(world: &GenerationWorld) {
    let result = world.result.borrow().clone();
    assert_eq!(result, Some(Err(GenerateError::InvalidRequest)));
}

#[scenario(path = "tests/features/outfit_generation.feature", index = 0)]
fn neutral_triple(world: GenerationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/outfit_generation.feature", index = 1)]
fn lone_dress(world: GenerationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/outfit_generation.feature", index = 2)]
fn exhaustive_gate(world: GenerationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/outfit_generation.feature", index = 3)]
fn clashing_scores_low(world: GenerationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/outfit_generation.feature", index = 4)]
fn capped_by_combinations(world: GenerationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/outfit_generation.feature", index = 5)]
fn zero_count(world: GenerationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/outfit_generation.feature", index = 6)]
fn dress_best_shoes(world: GenerationWorld) {
    let _ = world;
}
