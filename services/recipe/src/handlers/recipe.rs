use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::domain::types::{Recipe, RecipeChanges, RecipeDetail, RecipeFilter};
use crate::error::RecipeServiceError;
use crate::handlers::ingredient::IngredientResponse;
use crate::handlers::tag::TagResponse;
use crate::state::AppState;
use crate::usecase::image::AttachRecipeImageUseCase;
use crate::usecase::recipe::{
    CreateRecipeInput, CreateRecipeUseCase, GetRecipeUseCase, ListRecipesUseCase,
    UpdateRecipeUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// Flat representation: related records as id lists.
#[derive(Serialize)]
pub struct RecipeResponse {
    pub id: i32,
    pub title: String,
    pub time_minutes: i32,
    pub price: Decimal,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
    pub tags: Vec<i32>,
    pub ingredients: Vec<i32>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            time_minutes: recipe.time_minutes,
            price: recipe.price,
            description: recipe.description,
            link: recipe.link,
            image: recipe.image,
            tags: recipe.tag_ids,
            ingredients: recipe.ingredient_ids,
        }
    }
}

/// Detail representation: related records nested in full.
#[derive(Serialize)]
pub struct RecipeDetailResponse {
    pub id: i32,
    pub title: String,
    pub time_minutes: i32,
    pub price: Decimal,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
    pub tags: Vec<TagResponse>,
    pub ingredients: Vec<IngredientResponse>,
}

impl From<RecipeDetail> for RecipeDetailResponse {
    fn from(detail: RecipeDetail) -> Self {
        Self {
            id: detail.recipe.id,
            title: detail.recipe.title,
            time_minutes: detail.recipe.time_minutes,
            price: detail.recipe.price,
            description: detail.recipe.description,
            link: detail.recipe.link,
            image: detail.recipe.image,
            tags: detail.tags.into_iter().map(TagResponse::from).collect(),
            ingredients: detail
                .ingredients
                .into_iter()
                .map(IngredientResponse::from)
                .collect(),
        }
    }
}

// ── GET /recipe/recipes ──────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct RecipeListQuery {
    pub tags: Option<String>,
    pub ingredients: Option<String>,
}

/// Parse a comma-separated id list, e.g. `tags=1,2`.
fn parse_id_list(raw: Option<&str>) -> Result<Vec<i32>, RecipeServiceError> {
    let Some(raw) = raw else {
        return Ok(vec![]);
    };
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().map_err(|_| RecipeServiceError::MissingData))
        .collect()
}

pub async fn get_recipes(
    current: CurrentUser,
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<RecipeResponse>>, RecipeServiceError> {
    let query: RecipeListQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| RecipeServiceError::MissingData)?
        .unwrap_or_default();
    let filter = RecipeFilter {
        tag_ids: parse_id_list(query.tags.as_deref())?,
        ingredient_ids: parse_id_list(query.ingredients.as_deref())?,
    };

    let usecase = ListRecipesUseCase {
        repo: state.recipe_repo(),
    };
    let recipes = usecase.execute(current.id, filter).await?;
    Ok(Json(recipes.into_iter().map(RecipeResponse::from).collect()))
}

// ── POST /recipe/recipes ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateRecipeRequest {
    pub title: String,
    pub time_minutes: i32,
    pub price: Decimal,
    pub description: Option<String>,
    pub link: Option<String>,
    #[serde(default)]
    pub tags: Vec<i32>,
    #[serde(default)]
    pub ingredients: Vec<i32>,
}

pub async fn create_recipe(
    current: CurrentUser,
    State(state): State<AppState>,
    Json(body): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), RecipeServiceError> {
    let usecase = CreateRecipeUseCase {
        recipes: state.recipe_repo(),
        tags: state.tag_repo(),
        ingredients: state.ingredient_repo(),
    };
    let recipe = usecase
        .execute(
            current.id,
            CreateRecipeInput {
                title: body.title,
                time_minutes: body.time_minutes,
                price: body.price,
                description: body.description,
                link: body.link,
                tag_ids: body.tags,
                ingredient_ids: body.ingredients,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(RecipeResponse::from(recipe))))
}

// ── GET /recipe/recipes/{id} ─────────────────────────────────────────────────

pub async fn get_recipe(
    current: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RecipeDetailResponse>, RecipeServiceError> {
    let usecase = GetRecipeUseCase {
        repo: state.recipe_repo(),
    };
    let detail = usecase.execute(current.id, id).await?;
    Ok(Json(RecipeDetailResponse::from(detail)))
}

// ── PATCH /recipe/recipes/{id} ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub time_minutes: Option<i32>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub tags: Option<Vec<i32>>,
    pub ingredients: Option<Vec<i32>>,
}

pub async fn update_recipe(
    current: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateRecipeRequest>,
) -> Result<StatusCode, RecipeServiceError> {
    let usecase = UpdateRecipeUseCase {
        recipes: state.recipe_repo(),
        tags: state.tag_repo(),
        ingredients: state.ingredient_repo(),
    };
    usecase
        .execute(
            current.id,
            id,
            RecipeChanges {
                title: body.title,
                time_minutes: body.time_minutes,
                price: body.price,
                description: body.description,
                link: body.link,
                tag_ids: body.tags,
                ingredient_ids: body.ingredients,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /recipe/recipes/{id}/image ──────────────────────────────────────────

#[derive(Serialize)]
pub struct RecipeImageResponse {
    pub image: String,
}

pub async fn upload_recipe_image(
    current: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> Result<Json<RecipeImageResponse>, RecipeServiceError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| RecipeServiceError::InvalidImage)?
    {
        if field.name() != Some("image") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_owned();
        let data = field
            .bytes()
            .await
            .map_err(|_| RecipeServiceError::InvalidImage)?;
        upload = Some((file_name, data.to_vec()));
        break;
    }
    let Some((file_name, data)) = upload else {
        return Err(RecipeServiceError::InvalidImage);
    };
    if data.is_empty() {
        return Err(RecipeServiceError::InvalidImage);
    }

    let usecase = AttachRecipeImageUseCase {
        repo: state.recipe_repo(),
        store: state.image_store(),
    };
    let image = usecase.execute(current.id, id, &file_name, &data).await?;
    Ok(Json(RecipeImageResponse { image }))
}
