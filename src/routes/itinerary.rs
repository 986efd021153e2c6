use crate::models::trip::{ErrorResponse, ItineraryResponse, TripRequest};
use crate::services::groq_service::GroqService;
use crate::services::post_processing_service::PostProcessingService;
use crate::services::prompt_service::PromptService;
use actix_web::{web, HttpResponse, Responder};

/*
    /api/itinerary/generate
*/
pub async fn generate(
    data: web::Data<Option<GroqService>>,
    input: web::Json<TripRequest>,
) -> impl Responder {
    let request = input.into_inner();

    let city_missing = request
        .city
        .as_deref()
        .map(|city| city.trim().is_empty())
        .unwrap_or(true);

    if city_missing || request.interests.is_empty() {
        return HttpResponse::BadRequest()
            .json(ErrorResponse::new("City and interests are required"));
    }

    // Constructed once at startup; empty when GROQ_API_KEY was missing
    let groq = match data.get_ref() {
        Some(service) => service,
        None => {
            eprintln!("Groq service unavailable: GROQ_API_KEY not set");
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to generate itinerary"));
        }
    };

    let prompt = PromptService::compose(&request);

    match groq.generate_itinerary(&prompt.system, &prompt.user).await {
        Ok(raw_text) => {
            let itinerary = PostProcessingService::from_env().process(
                &raw_text,
                &request.budget,
                &request.trip_duration,
            );
            HttpResponse::Ok().json(ItineraryResponse { itinerary })
        }
        Err(err) => {
            // Upstream details stay in the logs, never in the response
            eprintln!("Itinerary generation error: {}", err);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to generate itinerary"))
        }
    }
}
