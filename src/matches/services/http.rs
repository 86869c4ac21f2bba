use crate::app_context::{AppContext, RequestContext};
use crate::geo::Coordinate;
use crate::matches::consts::MAX_USERNAME_LENGTH;
use crate::matches::models::Player;
use crate::matches::services::responses::{
    ConfirmGuessResponse, MatchResponse, MatchResponseError,
};
use crate::storage::interface::IMatchStorage;
use unicode_segmentation::UnicodeSegmentation;

pub struct MatchHttpHandler<'a, MS: IMatchStorage> {
    app_context: AppContext<MS>,
    request_context: &'a RequestContext,
}

impl<'a, MS> MatchHttpHandler<'a, MS>
where
    MS: IMatchStorage,
{
    pub fn new(app_context: AppContext<MS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn start(&self, username: String) -> MatchResponse {
        let username = username.trim();
        if username.is_empty() {
            return MatchResponse::failed(MatchResponseError::UsernameEmpty);
        }
        let username_length = username.graphemes(true).count();
        if username_length > MAX_USERNAME_LENGTH {
            tracing::info!(
                task = "match_refused",
                public_id = self.request_context.public_id,
                username_length,
                max_username_length = MAX_USERNAME_LENGTH,
            );
            return MatchResponse::failed(MatchResponseError::UsernameTooLong);
        }
        let player = Player {
            public_id: self.request_context.public_id.clone(),
            name: username.to_string(),
        };
        MatchResponse::ok(self.app_context.matches.start(player).await)
    }

    pub async fn current(&self) -> MatchResponse {
        self.app_context
            .matches
            .snapshot(&self.request_context.public_id)
            .await
            .into()
    }

    pub async fn open_guess_map(&self) -> MatchResponse {
        self.app_context
            .matches
            .open_guess_map(&self.request_context.public_id)
            .await
            .into()
    }

    pub async fn place_guess(&self, coordinate: Coordinate) -> MatchResponse {
        if !coordinate.is_valid() {
            return MatchResponse::failed(MatchResponseError::InvalidCoordinate);
        }
        self.app_context
            .matches
            .place_guess(&self.request_context.public_id, coordinate)
            .await
            .into()
    }

    pub async fn confirm_guess(&self) -> ConfirmGuessResponse {
        match self
            .app_context
            .matches
            .confirm_guess(&self.request_context.public_id)
            .await
        {
            Ok((resolution, game)) => ConfirmGuessResponse {
                error: false,
                error_code: None,
                result: Some(resolution.result),
                final_score: resolution.final_score,
                game: Some(game),
            },
            Err(err) => ConfirmGuessResponse {
                error: true,
                error_code: Some(err.into()),
                result: None,
                final_score: None,
                game: None,
            },
        }
    }

    pub async fn advance_round(&self) -> MatchResponse {
        self.app_context
            .matches
            .advance_round(&self.request_context.public_id)
            .await
            .into()
    }

    pub async fn reset(&self) -> MatchResponse {
        self.app_context
            .matches
            .reset(&self.request_context.public_id)
            .await
            .into()
    }
}
