use rust_decimal::Decimal;
use uuid::Uuid;

use ladle_recipe::domain::repository::{IngredientRepository as _, TagRepository as _};
use ladle_recipe::domain::types::{RecipeChanges, RecipeFilter};
use ladle_recipe::error::RecipeServiceError;
use ladle_recipe::usecase::recipe::{
    CreateRecipeInput, CreateRecipeUseCase, GetRecipeUseCase, ListRecipesUseCase,
    UpdateRecipeUseCase,
};

use crate::helpers::{MockIngredientRepo, MockRecipeRepo, MockTagRepo};

struct World {
    user_id: Uuid,
    tags: MockTagRepo,
    ingredients: MockIngredientRepo,
    recipes: MockRecipeRepo,
}

impl World {
    fn new() -> Self {
        let tags = MockTagRepo::default();
        let ingredients = MockIngredientRepo::default();
        let recipes = MockRecipeRepo {
            recipes: Default::default(),
            tags: tags.tags.clone(),
            ingredients: ingredients.ingredients.clone(),
        };
        Self {
            user_id: Uuid::now_v7(),
            tags,
            ingredients,
            recipes,
        }
    }

    fn tag_repo(&self) -> MockTagRepo {
        MockTagRepo {
            tags: self.tags.tags.clone(),
        }
    }

    fn ingredient_repo(&self) -> MockIngredientRepo {
        MockIngredientRepo {
            ingredients: self.ingredients.ingredients.clone(),
        }
    }

    fn recipe_repo(&self) -> MockRecipeRepo {
        MockRecipeRepo {
            recipes: self.recipes.recipes.clone(),
            tags: self.tags.tags.clone(),
            ingredients: self.ingredients.ingredients.clone(),
        }
    }

    fn create_usecase(&self) -> CreateRecipeUseCase<MockRecipeRepo, MockTagRepo, MockIngredientRepo> {
        CreateRecipeUseCase {
            recipes: self.recipe_repo(),
            tags: self.tag_repo(),
            ingredients: self.ingredient_repo(),
        }
    }

    fn update_usecase(&self) -> UpdateRecipeUseCase<MockRecipeRepo, MockTagRepo, MockIngredientRepo> {
        UpdateRecipeUseCase {
            recipes: self.recipe_repo(),
            tags: self.tag_repo(),
            ingredients: self.ingredient_repo(),
        }
    }

    fn sample_input(&self, title: &str, tag_ids: Vec<i32>, ingredient_ids: Vec<i32>) -> CreateRecipeInput {
        CreateRecipeInput {
            title: title.into(),
            time_minutes: 30,
            price: Decimal::new(599, 2),
            description: Some("Sample description".into()),
            link: None,
            tag_ids,
            ingredient_ids,
        }
    }
}

#[tokio::test]
async fn should_create_recipe_with_owned_tags_and_ingredients() {
    let world = World::new();
    let tag = world.tags.create(world.user_id, "Dessert").await.unwrap();
    let ingredient = world
        .ingredients
        .create(world.user_id, "Sugar")
        .await
        .unwrap();

    let recipe = world
        .create_usecase()
        .execute(
            world.user_id,
            world.sample_input("Chocolate cake", vec![tag.id], vec![ingredient.id]),
        )
        .await
        .unwrap();

    assert_eq!(recipe.title, "Chocolate cake");
    assert_eq!(recipe.tag_ids, vec![tag.id]);
    assert_eq!(recipe.ingredient_ids, vec![ingredient.id]);

    let detail = GetRecipeUseCase {
        repo: world.recipe_repo(),
    }
    .execute(world.user_id, recipe.id)
    .await
    .unwrap();
    assert_eq!(detail.tags.len(), 1);
    assert_eq!(detail.tags[0].name, "Dessert");
    assert_eq!(detail.ingredients[0].name, "Sugar");
}

#[tokio::test]
async fn should_reject_recipe_referencing_someone_elses_tag() {
    let world = World::new();
    let stranger = Uuid::now_v7();
    let foreign_tag = world.tags.create(stranger, "Vegan").await.unwrap();

    let result = world
        .create_usecase()
        .execute(
            world.user_id,
            world.sample_input("Salad", vec![foreign_tag.id], vec![]),
        )
        .await;

    assert!(matches!(result, Err(RecipeServiceError::TagNotFound)));
}

#[tokio::test]
async fn should_filter_recipe_list_by_tag_ids() {
    let world = World::new();
    let dessert = world.tags.create(world.user_id, "Dessert").await.unwrap();
    let dinner = world.tags.create(world.user_id, "Dinner").await.unwrap();

    let cake = world
        .create_usecase()
        .execute(
            world.user_id,
            world.sample_input("Cake", vec![dessert.id], vec![]),
        )
        .await
        .unwrap();
    world
        .create_usecase()
        .execute(
            world.user_id,
            world.sample_input("Stew", vec![dinner.id], vec![]),
        )
        .await
        .unwrap();

    let filtered = ListRecipesUseCase {
        repo: world.recipe_repo(),
    }
    .execute(
        world.user_id,
        RecipeFilter {
            tag_ids: vec![dessert.id],
            ingredient_ids: vec![],
        },
    )
    .await
    .unwrap();

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, cake.id);
}

#[tokio::test]
async fn should_list_only_own_recipes_newest_first() {
    let world = World::new();
    let stranger = Uuid::now_v7();

    let first = world
        .create_usecase()
        .execute(world.user_id, world.sample_input("First", vec![], vec![]))
        .await
        .unwrap();
    let second = world
        .create_usecase()
        .execute(world.user_id, world.sample_input("Second", vec![], vec![]))
        .await
        .unwrap();
    world
        .create_usecase()
        .execute(stranger, world.sample_input("Not mine", vec![], vec![]))
        .await
        .unwrap();

    let listed = ListRecipesUseCase {
        repo: world.recipe_repo(),
    }
    .execute(world.user_id, RecipeFilter::default())
    .await
    .unwrap();

    assert_eq!(
        listed.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );
}

#[tokio::test]
async fn should_apply_partial_update_and_replace_tag_set() {
    let world = World::new();
    let old_tag = world.tags.create(world.user_id, "Old").await.unwrap();
    let new_tag = world.tags.create(world.user_id, "New").await.unwrap();

    let recipe = world
        .create_usecase()
        .execute(
            world.user_id,
            world.sample_input("Original", vec![old_tag.id], vec![]),
        )
        .await
        .unwrap();

    world
        .update_usecase()
        .execute(
            world.user_id,
            recipe.id,
            RecipeChanges {
                title: Some("Updated".into()),
                tag_ids: Some(vec![new_tag.id]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let detail = GetRecipeUseCase {
        repo: world.recipe_repo(),
    }
    .execute(world.user_id, recipe.id)
    .await
    .unwrap();
    assert_eq!(detail.recipe.title, "Updated");
    assert_eq!(detail.recipe.tag_ids, vec![new_tag.id]);
    assert_eq!(detail.recipe.time_minutes, 30);
}

#[tokio::test]
async fn should_not_update_someone_elses_recipe() {
    let world = World::new();
    let stranger = Uuid::now_v7();

    let recipe = world
        .create_usecase()
        .execute(world.user_id, world.sample_input("Mine", vec![], vec![]))
        .await
        .unwrap();

    let result = world
        .update_usecase()
        .execute(
            stranger,
            recipe.id,
            RecipeChanges {
                title: Some("Hijacked".into()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(RecipeServiceError::RecipeNotFound)));
}
