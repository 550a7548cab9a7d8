//! Account commands.

use anyhow::Result;
use dialoguer::Password;
use eco_commerce::accounts::{Credentials, PasswordStrength, Registration, Role, User};
use serde_json::json;

use super::{LoginArgs, ProfileArgs, RegisterArgs};
use crate::context::Context;
use crate::output::format_points;

/// Run the register command.
pub fn register(args: RegisterArgs, ctx: &Context) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };
    if let Some(strength) = PasswordStrength::of(&password) {
        ctx.output.debug(&format!("Password strength: {}", strength.display_name()));
    }

    let mut session = ctx.session()?;
    let user = session
        .state
        .register(Registration {
            name: args.name,
            email: args.email,
            phone: args.phone,
            confirm_password: password.clone(),
            password,
            role: role_for(args.admin),
        })?
        .clone();
    session.save()?;

    if ctx.output.is_json() {
        ctx.output.json(&account_json(&user));
        return Ok(());
    }
    ctx.output.success(&format!("Welcome to EcoBazaar, {}!", user.name));
    ctx.output.kv("Account", &user.id.to_string());
    ctx.output.kv("Role", user.role.as_str());

    Ok(())
}

/// Run the login command.
pub fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let mut session = ctx.session()?;
    let user = session
        .state
        .login(&Credentials::new(args.email, password, role_for(args.admin)))?
        .clone();
    session.save()?;

    if ctx.output.is_json() {
        ctx.output.json(&account_json(&user));
        return Ok(());
    }
    ctx.output.success(&format!("Signed in as {} ({})", user.name, user.email));

    Ok(())
}

/// Run the logout command.
pub fn logout(ctx: &Context) -> Result<()> {
    let mut session = ctx.session()?;
    let was_signed_in = session.state.logout();
    session.save()?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "signed_out": was_signed_in }));
    } else if was_signed_in {
        ctx.output.success("Signed out");
    } else {
        ctx.output.info("Not signed in");
    }

    Ok(())
}

/// Run the whoami command.
pub fn whoami(ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let user = session.user()?;

    if ctx.output.is_json() {
        ctx.output.json(&account_json(user));
        return Ok(());
    }
    print_account(user, ctx);

    Ok(())
}

/// Run the profile command.
pub fn profile(args: ProfileArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.session()?;

    if args.name.is_none() && args.phone.is_none() {
        let user = session.user()?;
        if ctx.output.is_json() {
            ctx.output.json(&account_json(user));
            return Ok(());
        }
        print_account(user, ctx);
        return Ok(());
    }

    let current = session.user()?;
    let name = args.name.unwrap_or_else(|| current.name.clone());
    let phone = args.phone.unwrap_or_else(|| current.phone.clone());
    let user = session.state.update_profile(&name, &phone)?.clone();
    session.save()?;

    if ctx.output.is_json() {
        ctx.output.json(&account_json(&user));
        return Ok(());
    }
    ctx.output.success("Profile updated");
    print_account(&user, ctx);

    Ok(())
}

fn role_for(admin: bool) -> Role {
    if admin {
        Role::Admin
    } else {
        Role::User
    }
}

fn print_account(user: &User, ctx: &Context) {
    ctx.output.header(&user.name);
    ctx.output.kv("Email", &user.email);
    ctx.output.kv("Phone", &user.phone);
    ctx.output.kv("Role", user.role.as_str());
    ctx.output.kv("Eco points", &format_points(user.eco_points));
    ctx.output.kv(
        "Level",
        &format!("{} ({} points to next)", user.level(), user.points_to_next_level()),
    );
    if !user.eco_badges.is_empty() {
        ctx.output.kv("Badges", &user.eco_badges.join(", "));
    }
}

/// The account without its password.
fn account_json(user: &User) -> serde_json::Value {
    json!({
        "id": user.id,
        "name": user.name,
        "email": user.email,
        "phone": user.phone,
        "role": user.role,
        "eco_points": user.eco_points,
        "total_co2_kg": user.total_co2_kg,
        "eco_badges": user.eco_badges,
        "level": user.level(),
    })
}
