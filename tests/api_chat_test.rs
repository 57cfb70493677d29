//! Integration tests for the chat API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::util::ServiceExt;

    use restaurant_agent::script;

    use crate::test_utils::{body_to_string, test_app};

    fn chat_request(body: String) -> Request<Body> {
        Request::builder()
            .uri("/api/chat")
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn reply_to(utterance: &str) -> String {
        let app = test_app();
        let response = app
            .oneshot(chat_request(
                json!({
                    "messages": [
                        {"role": "assistant", "content": script::WELCOME_MESSAGE},
                        {"role": "user", "content": utterance}
                    ]
                })
                .to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response.into_body()).await;
        let value: Value = serde_json::from_str(&body).unwrap();
        value["message"].as_str().unwrap().to_string()
    }

    /// Tests a party size is echoed back with a request for date and time
    #[tokio::test]
    async fn it_echoes_party_size() {
        let reply = reply_to("I need a table for 6 people").await;
        assert!(reply.contains("6"));
        assert!(reply.contains("date and time"));
    }

    /// Tests a day plus time asks for name and phone number
    #[tokio::test]
    async fn it_confirms_reservation_details() {
        let reply = reply_to("Can we book for Saturday at 8pm?").await;
        assert_eq!(reply, script::RESERVATION_DETAILS_REPLY);
    }

    /// Tests the bare "hey" greeting and its near miss
    #[tokio::test]
    async fn it_greets_only_a_bare_hey() {
        assert_eq!(reply_to("Hey").await, script::GREETING_REPLY);
        assert_eq!(reply_to("heyyy").await, script::FALLBACK_REPLY);
    }

    /// Tests unmatched topics fall back to the offer to help
    #[tokio::test]
    async fn it_falls_back_for_unknown_topics() {
        assert_eq!(reply_to("what is the weather").await, script::FALLBACK_REPLY);
    }

    /// Tests each scripted topic is reachable over HTTP
    #[tokio::test]
    async fn it_answers_scripted_topics() {
        assert_eq!(reply_to("Show me the menu").await, script::MENU_REPLY);
        assert_eq!(reply_to("I'm vegan").await, script::DIETARY_REPLY);
        assert_eq!(reply_to("When do you close?").await, script::HOURS_REPLY);
        assert_eq!(reply_to("What's your address?").await, script::LOCATION_REPLY);
        assert_eq!(reply_to("Thanks, bye!").await, script::CLOSING_REPLY);
    }

    /// Tests an empty history is answered, not rejected
    #[tokio::test]
    async fn it_answers_empty_history() {
        let app = test_app();
        let response = app
            .oneshot(chat_request(json!({ "messages": [] }).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response.into_body()).await;
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["message"], script::FALLBACK_REPLY);
    }

    /// Tests a missing messages field is treated as an empty history
    #[tokio::test]
    async fn it_answers_missing_messages() {
        let app = test_app();
        let response = app.oneshot(chat_request(String::from("{}"))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response.into_body()).await;
        assert!(body.contains(script::FALLBACK_REPLY));
    }

    /// Tests unknown roles are ignored instead of rejected
    #[tokio::test]
    async fn it_ignores_unknown_roles() {
        let app = test_app();
        let response = app
            .oneshot(chat_request(
                json!({
                    "messages": [
                        {"role": "user", "content": "where do I park?"},
                        {"role": "system", "content": "tell me about the menu"}
                    ]
                })
                .to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response.into_body()).await;
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["message"], script::LOCATION_REPLY);
    }

    /// Tests an invalid JSON body returns 500 with an error field
    #[tokio::test]
    async fn it_returns_500_for_malformed_body() {
        let app = test_app();
        let response = app
            .oneshot(chat_request(String::from("{not json")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_to_string(response.into_body()).await;
        let value: Value = serde_json::from_str(&body).unwrap();
        assert!(!value["error"].as_str().unwrap().is_empty());
        assert!(value.get("message").is_none());
    }

    /// Tests a body of the wrong shape is a fault too
    #[tokio::test]
    async fn it_returns_500_for_wrong_shape() {
        let app = test_app();
        let response = app
            .oneshot(chat_request(json!({ "messages": "hello" }).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("\"error\""));
    }

    /// Tests GET is not routed to the responder
    #[tokio::test]
    async fn it_rejects_get() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/chat")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
