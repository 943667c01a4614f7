//! Wallet service client

use async_trait::async_trait;
use shared::client::{
    LoginRequest, RegisterRequest, ResetPasswordRequest, ResetPasswordResponse, TopUpRequest,
    VerifyRequest, VerifyResponse,
};
use shared::Wallet;
use urlencoding::encode;

use crate::http::HttpClient;
use crate::ClientResult;

#[async_trait]
pub trait WalletApi: Send + Sync {
    async fn get_wallet(&self, roll_number: &str) -> ClientResult<Wallet>;

    async fn register(
        &self,
        student_name: &str,
        roll_number: &str,
        password: &str,
    ) -> ClientResult<Wallet>;

    /// Fails on unknown roll number or wrong password
    async fn login(&self, roll_number: &str, password: &str) -> ClientResult<Wallet>;

    async fn top_up(&self, roll_number: &str, amount: f64) -> ClientResult<Wallet>;

    async fn verify_student(
        &self,
        roll_number: &str,
        student_name: &str,
    ) -> ClientResult<VerifyResponse>;

    async fn reset_password(
        &self,
        roll_number: &str,
        new_password: &str,
    ) -> ClientResult<ResetPasswordResponse>;
}

/// HTTP client for `/wallet`
#[derive(Debug, Clone)]
pub struct WalletService {
    http: HttpClient,
}

impl WalletService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl WalletApi for WalletService {
    async fn get_wallet(&self, roll_number: &str) -> ClientResult<Wallet> {
        self.http
            .get(&format!("wallet/{}", encode(roll_number)))
            .await
    }

    async fn register(
        &self,
        student_name: &str,
        roll_number: &str,
        password: &str,
    ) -> ClientResult<Wallet> {
        let request = RegisterRequest {
            student_name: student_name.to_string(),
            roll_number: roll_number.to_string(),
            password: password.to_string(),
        };
        self.http.post("wallet/register", &request).await
    }

    async fn login(&self, roll_number: &str, password: &str) -> ClientResult<Wallet> {
        let request = LoginRequest {
            roll_number: roll_number.to_string(),
            password: password.to_string(),
        };
        self.http.post("wallet/login", &request).await
    }

    async fn top_up(&self, roll_number: &str, amount: f64) -> ClientResult<Wallet> {
        let request = TopUpRequest {
            roll_number: roll_number.to_string(),
            amount,
        };
        self.http.post("wallet/add", &request).await
    }

    async fn verify_student(
        &self,
        roll_number: &str,
        student_name: &str,
    ) -> ClientResult<VerifyResponse> {
        let request = VerifyRequest {
            roll_number: roll_number.to_string(),
            student_name: student_name.to_string(),
        };
        self.http.post("wallet/verify", &request).await
    }

    async fn reset_password(
        &self,
        roll_number: &str,
        new_password: &str,
    ) -> ClientResult<ResetPasswordResponse> {
        let request = ResetPasswordRequest {
            roll_number: roll_number.to_string(),
            new_password: new_password.to_string(),
        };
        self.http.post("wallet/reset-password", &request).await
    }
}
