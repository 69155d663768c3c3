use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::auth::accounts::{ACCOUNTS, UserRole};
use crate::auth::password::SharedPassword;
use crate::auth::session::{get_role, set_role};
use crate::auth::{csrf, rate_limit::RateLimiter};
use crate::errors::{AppError, render};
use crate::handlers::helpers::redirect;
use crate::templates_structs::{APP_NAME, LoginTemplate, SelectOption};

#[derive(Deserialize)]
pub struct LoginForm {
    pub account: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

fn login_template(session: &Session, selected: &str, error: Option<String>) -> LoginTemplate {
    LoginTemplate {
        error,
        app_name: APP_NAME.to_string(),
        csrf_token: csrf::get_or_create_token(session),
        accounts: ACCOUNTS
            .iter()
            .map(|a| SelectOption::new(a.id, a.name, a.id == selected))
            .collect(),
    }
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    // If already logged in, redirect to dashboard
    if get_role(&session).is_some() {
        return Ok(redirect("/dashboard"));
    }
    render(login_template(&session, "", None))
}

pub async fn login_submit(
    req: HttpRequest,
    session: Session,
    form: web::Form<LoginForm>,
    password: web::Data<SharedPassword>,
    limiter: web::Data<RateLimiter>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let ip = req
        .peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED));

    if limiter.is_blocked(ip) {
        log::warn!("Login blocked for {ip}: too many failures");
        let tmpl = login_template(
            &session,
            &form.account,
            Some("Too many failed login attempts. Please try again later.".to_string()),
        );
        return render(tmpl);
    }

    let role = UserRole::from_account_id(&form.account);
    let candidate = form.password.clone();
    let shared = password.get_ref().clone();
    let verified = web::block(move || shared.verify(&candidate))
        .await
        .map_err(|e| AppError::Hash(e.to_string()))?;

    match role {
        Some(role) if verified => {
            limiter.clear(ip);
            session.renew();
            set_role(&session, &role)?;
            log::info!("{} logged in", role.id());
            Ok(redirect("/dashboard"))
        }
        _ => {
            limiter.record_failure(ip);
            log::info!("Failed login for account '{}'", form.account);
            let tmpl = login_template(&session, &form.account, Some("Invalid account or password".to_string()));
            render(tmpl)
        }
    }
}

pub async fn logout(session: Session, form: web::Form<CsrfOnly>) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(redirect("/login"))
}
