//! Seed script for development — loads the demo dataset into PostgreSQL.
//!
//! Usage: `cargo run --bin seed [path/to/dataset.json]`
//!
//! Requires `DATABASE_URL` (reads .env). Without a path the bundled demo data
//! is used.

use excelia::repository::Dataset;
use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
    let pool = excelia::db::create_pool(&db_url, 5).await?;

    // Run migrations first
    excelia::db::run_migrations(&pool).await?;

    let data = match std::env::args().nth(1) {
        Some(path) => Dataset::from_path(std::path::Path::new(&path))?,
        None => Dataset::demo()?,
    };

    println!("=== Excelia Seed Script ===");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM offices")
        .fetch_one(&pool)
        .await?;
    if count > 0 {
        println!("[skip] Offices already exist ({count}), database left untouched");
        return Ok(());
    }

    seed(&pool, &data).await?;

    println!("\n=== Seed complete! ===");
    Ok(())
}

async fn seed(pool: &PgPool, data: &Dataset) -> anyhow::Result<()> {
    let mut tx = pool.begin().await?;

    for office in &data.offices {
        sqlx::query("INSERT INTO offices (id, name) VALUES ($1, $2)")
            .bind(office.id)
            .bind(&office.name)
            .execute(&mut *tx)
            .await?;
    }
    println!("[done] Created {} offices", data.offices.len());

    for dept in &data.departments {
        sqlx::query("INSERT INTO departments (id, name, office_id) VALUES ($1, $2, $3)")
            .bind(dept.id)
            .bind(&dept.name)
            .bind(dept.office_id)
            .execute(&mut *tx)
            .await?;
    }
    println!("[done] Created {} departments", data.departments.len());

    for emp in &data.employees {
        sqlx::query(
            "INSERT INTO employees (id, first_name, last_name, department_id, salary, office_id)
             VALUES ($1, $2, $3, $4, $5::NUMERIC / 10000, $6)",
        )
        .bind(emp.id)
        .bind(&emp.first_name)
        .bind(&emp.last_name)
        .bind(emp.department_id)
        .bind(emp.salary.map(|s| s.minor()))
        .bind(emp.office_id)
        .execute(&mut *tx)
        .await?;
    }
    println!("[done] Created {} employees", data.employees.len());

    for project in &data.projects {
        sqlx::query(
            "INSERT INTO projects (id, name, status, start_date, end_date, budget, office_id)
             VALUES ($1, $2, $3, $4, $5, $6::NUMERIC / 10000, $7)",
        )
        .bind(project.id)
        .bind(&project.name)
        .bind(project.status)
        .bind(project.start_date)
        .bind(project.end_date)
        .bind(project.budget.map(|b| b.minor()))
        .bind(project.office_id)
        .execute(&mut *tx)
        .await?;
    }
    println!("[done] Created {} projects", data.projects.len());

    for a in &data.assignments {
        sqlx::query(
            "INSERT INTO project_employees (project_id, employee_id, allocation)
             VALUES ($1, $2, $3)",
        )
        .bind(a.project_id)
        .bind(a.employee_id)
        .bind(a.allocation)
        .execute(&mut *tx)
        .await?;
    }
    println!("[done] Created {} project assignments", data.assignments.len());

    tx.commit().await?;
    Ok(())
}
